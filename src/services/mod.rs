pub mod memory_store;
pub mod risk;
pub mod signals;
pub mod supabase_store;
pub mod trade_store;

pub use memory_store::MemoryTradeStore;
pub use risk::RiskLimits;
pub use signals::evaluate;
pub use supabase_store::SupabaseStore;
pub use trade_store::{StoreError, TradeStore};
