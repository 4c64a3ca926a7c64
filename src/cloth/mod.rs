pub(crate) mod animator;
pub(crate) mod mesh;
pub(crate) mod normals;
pub(crate) mod wave;
