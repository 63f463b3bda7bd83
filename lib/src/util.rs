extern crate num_traits;

use std::ops::{AddAssign, Deref};

use num_traits::Unsigned;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn inner_ref(&self) -> &T {
        &self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += T::one();
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;

    #[test]
    fn test_counter_increment() {
        let mut counter = Counter::<usize>::default();
        assert_eq!(*counter, 0);

        counter.increment();
        counter.increment();
        assert_eq!(*counter, 2);
    }
}
