pub mod glutils;
pub mod logging;
pub mod math;
pub mod renderer;
pub mod shaders;
pub mod system;
