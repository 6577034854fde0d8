//! [`Handler`] abstractions.

/// Executable handler.
///
/// Every operation runs synchronously to completion: the whole engine is a
/// single logical thread of execution, and no operation suspends mid-mutation.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
