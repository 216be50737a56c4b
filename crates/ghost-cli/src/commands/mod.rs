pub mod ask;
pub mod classify;
pub mod dispatch;
pub mod metrics;
pub mod plan;
pub mod serve;
pub mod speak;
pub mod suggest;
pub mod task;
