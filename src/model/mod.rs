//! Domain entities decoded from and encoded to the API wire format.
//!
//! All entities are immutable value types with no back-references. A response
//! owns the entity graph it decodes. Money is always an exact
//! [`Decimal`](rust_decimal::Decimal), never a float.

pub mod amount;
pub mod balance;
pub mod card;
pub mod error_code;
pub mod fee;
pub mod operation;
pub mod status;

pub use amount::MoneyAmount;
pub use balance::BalanceDetails;
pub use card::{Card, CardType, MoneySource, PaymentSource, Wallet};
pub use error_code::{ErrorCode, UnknownCode};
pub use fee::{AmountType, Fee, StdFee};
pub use operation::{Direction, Operation, OperationStatus, OperationType};
pub use status::Status;
