pub mod prayer;

pub use prayer::Prayer;
