/// Node of a [`Bst`](super::Bst).
#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
}

impl<T> BstNode<T> {
    pub fn new(v: T) -> Self {
        Self { l: None, r: None, v }
    }
}
