pub mod dev;
pub mod device;
pub mod rate;
pub mod route;
pub mod sampler;
