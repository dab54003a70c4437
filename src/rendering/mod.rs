pub mod scene;
pub mod spheres;
