use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;

pub trait Object {
    fn object_type(&self) -> ObjectType;

    fn object_id(&self) -> &ObjectId;

    fn display(&self) -> String;
}

/// Anything the object database can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBox {
    Blob(Blob),
    Tree(Tree),
}

impl Object for ObjectBox {
    fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(blob) => blob.object_type(),
            ObjectBox::Tree(tree) => tree.object_type(),
        }
    }

    fn object_id(&self) -> &ObjectId {
        match self {
            ObjectBox::Blob(blob) => blob.object_id(),
            ObjectBox::Tree(tree) => tree.object_id(),
        }
    }

    fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
        }
    }
}

impl From<Blob> for ObjectBox {
    fn from(blob: Blob) -> Self {
        ObjectBox::Blob(blob)
    }
}

impl From<Tree> for ObjectBox {
    fn from(tree: Tree) -> Self {
        ObjectBox::Tree(tree)
    }
}
