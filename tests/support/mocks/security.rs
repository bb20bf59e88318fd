// tests/support/mocks/security.rs
use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use biscuit_auth::{Biscuit, KeyPair, builder::Term};
use campuscare_core::{
    domain::user::Role, infrastructure::security::BiscuitTokenVerifier,
};

/// Plays the campus identity provider: signs tokens the verifier accepts.
pub struct TestIdentityProvider {
    root: KeyPair,
}

impl Default for TestIdentityProvider {
    fn default() -> Self {
        Self {
            root: KeyPair::new(),
        }
    }
}

impl TestIdentityProvider {
    pub fn verifier(&self) -> BiscuitTokenVerifier {
        BiscuitTokenVerifier::from_public_key(self.root.public())
    }

    pub fn token(&self, user_id: i64, username: &str, role: Role) -> String {
        self.mint(user_id, username, role, false, Duration::from_secs(3600))
    }

    pub fn superuser_token(&self, user_id: i64, username: &str, role: Role) -> String {
        self.mint(user_id, username, role, true, Duration::from_secs(3600))
    }

    pub fn expired_token(&self, user_id: i64, username: &str, role: Role) -> String {
        let issued = SystemTime::now() - Duration::from_secs(7200);
        self.sign(user_id, username, role, false, issued, issued + Duration::from_secs(60))
    }

    fn mint(&self, user_id: i64, username: &str, role: Role, superuser: bool, ttl: Duration) -> String {
        let issued = SystemTime::now();
        self.sign(user_id, username, role, superuser, issued, issued + ttl)
    }

    fn sign(
        &self,
        user_id: i64,
        username: &str,
        role: Role,
        superuser: bool,
        issued: SystemTime,
        expires: SystemTime,
    ) -> String {
        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("uid".into(), user_id.into());
        params.insert("uname".into(), username.to_string().into());
        params.insert("urole".into(), role.as_str().into());
        params.insert("super".into(), superuser.into());
        params.insert("issued".into(), issued.into());
        params.insert("exp".into(), expires.into());

        let code = r#"
            user({uid}, {uname});
            role({urole});
            superuser({super});
            issued_at({issued});
            expires_at({exp});
            check if time($now), $now <= {exp};
        "#;

        Biscuit::builder()
            .code_with_params(code, params, HashMap::new())
            .expect("valid token code")
            .build(&self.root)
            .expect("token signs")
            .to_base64()
            .expect("token serializes")
    }
}
