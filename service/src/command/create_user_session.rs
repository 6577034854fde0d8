//! [`Command`] for creating a [`Session`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret as _, SecretBox};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::{Login, Password};
use crate::{
    domain::{user, Session},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a [`Session`] by user credentials.
#[derive(Debug)]
pub struct CreateUserSession {
    /// [`Login`] of the user.
    pub login: user::Login,

    /// [`Password`] of the user.
    pub password: SecretBox<user::Password>,
}

impl<Db> Command<CreateUserSession> for Service<Db>
where
    Db: Database<Insert<Session>, Err = Traced<database::Error>>,
{
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        cmd: CreateUserSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateUserSession { login, password } = cmd;

        let role = user::authenticate(&login, password.expose_secret())
            .ok_or_else(|| tracerr::new!(E::WrongCredentials))?;

        let session = Session { login, role };
        self.database()
            .execute(Insert(session.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(session)
    }
}

/// Error of [`CreateUserSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`CreateUserSession`] contains wrong credentials.
    #[display("Wrong user credentials")]
    WrongCredentials,
}

#[cfg(test)]
mod spec {
    use secrecy::SecretBox;

    use crate::{domain::user::Role, query, testing, Command as _};

    use super::{CreateUserSession, ExecutionError};

    fn credentials(login: &str, password: &str) -> CreateUserSession {
        CreateUserSession {
            login: login.parse().unwrap(),
            password: SecretBox::new(Box::new(password.parse().unwrap())),
        }
    }

    #[test]
    fn creates_and_persists_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        let session =
            service.execute(credentials("admin", "admin123")).unwrap();
        assert_eq!(session.role, Role::Admin);
        assert!(session.is_admin());

        let current =
            service.execute(query::session::Current::by(())).unwrap();
        assert_eq!(current, Some(session));
    }

    #[test]
    fn matches_credentials_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        let session =
            service.execute(credentials("Admin", "ADMIN123")).unwrap();
        assert_eq!(session.login.to_string(), "admin");
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn replaces_prior_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        _ = service.execute(credentials("admin", "admin123")).unwrap();
        _ = service.execute(credentials("user", "user123")).unwrap();

        let current = service
            .execute(query::session::Current::by(()))
            .unwrap()
            .unwrap();
        assert_eq!(current.login.to_string(), "user");
        assert_eq!(current.role, Role::User);
    }

    #[test]
    fn rejects_wrong_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        let err =
            service.execute(credentials("admin", "hunter2")).unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::WrongCredentials));

        let current =
            service.execute(query::session::Current::by(())).unwrap();
        assert_eq!(current, None);
    }
}
