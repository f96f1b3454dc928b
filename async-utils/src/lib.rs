mod cancel;
mod settle;

pub use cancel::CancelErr;
pub use cancel::OrCancelExt;
pub use settle::settle_all;
