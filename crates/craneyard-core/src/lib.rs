pub mod camera;
pub mod constants;
pub mod crane;
pub mod mesh;
pub mod obj;
pub mod scroll;
pub mod shapes;

pub use camera::*;
pub use constants::*;
pub use crane::*;
pub use mesh::*;
pub use obj::*;
pub use scroll::*;
pub use shapes::*;
