pub const NULL_HASH_CODE: i32 = 0;

pub trait HashCode {
    fn hash_code(&self) -> i32;
}

impl HashCode for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(NULL_HASH_CODE, HashCode::hash_code)
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}
