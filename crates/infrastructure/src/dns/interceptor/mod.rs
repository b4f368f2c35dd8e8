pub mod multiply;

pub use multiply::MultiplyInterceptor;
