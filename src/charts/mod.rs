/// Chart data computation, kept separate from egui rendering so the
/// aggregation logic is testable without a UI context.

pub mod bar;
pub mod histogram;
pub mod scatter;
