use crate::domain::errors::DomainError;

const CNT_USER_EXTERNAL_ID: &str = "users_external_id_key";
const CNT_SUBSCRIPTION_PAIR: &str = "subscriptions_pkey";
const CNT_SUBSCRIPTION_SELF_CHECK: &str = "subscriptions_no_self_chk";
const CNT_REACTION_PAIR: &str = "comment_reactions_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EXTERNAL_ID => {
                        DomainError::Conflict("external identity reference already exists".into())
                    }
                    CNT_SUBSCRIPTION_PAIR => DomainError::Conflict("already subscribed".into()),
                    CNT_SUBSCRIPTION_SELF_CHECK => {
                        DomainError::Validation("cannot subscribe to yourself".into())
                    }
                    CNT_REACTION_PAIR => DomainError::Conflict("reaction already recorded".into()),
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
