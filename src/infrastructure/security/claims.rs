// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Build the actor from the authority facts `user(id, name)`, `role(name)`,
/// `expires_at(date)` and the optional `superuser(true)`.
pub fn parse_claims(facts: Vec<Fact>, now: SystemTime) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let username = ctx
        .username
        .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;
    if expires_at < now {
        return Err(ApplicationError::unauthorized("token expired"));
    }

    let id = UserId::new(user_id)
        .map_err(|_| ApplicationError::unauthorized("invalid user id"))?;
    Ok(AuthenticatedUser::new(
        id,
        username,
        role.effective(ctx.superuser),
    ))
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    superuser: bool,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply(&fact.predicate);
        }
        ctx
    }

    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(name)]) => self.role = name.parse().ok(),
            ("superuser", [Term::Bool(flag)]) => self.superuser = *flag,
            ("expires_at", [Term::Date(seconds)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            _ => {}
        }
    }
}
