use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vector2<T> {
  pub x: T,
  pub y: T,
}
