//! Record trait for dispatchable values.

use std::any::Any;

/// A marker trait for values drawn from a closed variant set.
///
/// Records are immutable once constructed and must be `Send + Sync + 'static`
/// so they can be inspected through `&dyn Any` on the dynamic path.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// struct Ping { from: String }
///
/// impl Record for Ping {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Record",
    label = "must be `Any + Send + Sync + 'static`",
    note = "Variants and closed sets must implement `Record` before they can be dispatched."
)]
pub trait Record: Any + Send + Sync + 'static {}
