//! [`Command`] for deleting the current [`Session`].

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::Session,
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting the current [`Session`] (logout).
///
/// Deleting an already absent [`Session`] is a no-op, not an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteUserSession;

impl<Db> Command<DeleteUserSession> for Service<Db>
where
    Db: Database<Delete<By<Session, ()>>, Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    fn execute(&self, _: DeleteUserSession) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Delete(By::new(())))
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

/// Error of [`DeleteUserSession`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use crate::{query, testing, Command as _};

    use super::DeleteUserSession;

    #[test]
    fn clears_current_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());
        testing::login(&service, "admin", "admin123");

        service.execute(DeleteUserSession).unwrap();

        let current =
            service.execute(query::session::Current::by(())).unwrap();
        assert_eq!(current, None);
    }

    #[test]
    fn tolerates_absent_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = testing::service(dir.path());

        service.execute(DeleteUserSession).unwrap();
    }
}
