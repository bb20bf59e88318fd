use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_TICKET_REPORTER: &str = "tickets_reporter_id_fkey";
const CNT_TICKET_ASSIGNEE: &str = "tickets_assignee_id_fkey";
const CNT_TICKET_RESOLVED_CHECK: &str = "tickets_resolved_requires_timestamp_chk";
const CNT_AUDIT_TICKET: &str = "ticket_audit_log_ticket_id_fkey";
const CNT_NOTIFICATION_RECIPIENT: &str = "notifications_recipient_id_fkey";
const CNT_CHAT_USER: &str = "chat_exchanges_user_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_TICKET_REPORTER => DomainError::NotFound("reporter not found".into()),
                    CNT_TICKET_ASSIGNEE => DomainError::Validation("assignee not found".into()),
                    CNT_AUDIT_TICKET => DomainError::NotFound("ticket not found".into()),
                    CNT_NOTIFICATION_RECIPIENT => {
                        DomainError::NotFound("notification recipient not found".into())
                    }
                    CNT_CHAT_USER => DomainError::NotFound("chat user not found".into()),
                    CNT_TICKET_RESOLVED_CHECK => {
                        DomainError::Validation("resolved tickets require resolved_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
