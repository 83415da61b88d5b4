pub trait IteratorExt: Iterator {
    /// Collects the iterator into `Some(collection)`,
    /// or `None` if the iterator is empty.
    fn collect_non_empty<C>(self) -> Option<C>
    where
        C: FromIterator<Self::Item>,
        Self: Sized,
    {
        let mut iter = self.peekable();
        iter.peek()?;
        Some(iter.collect())
    }
}

impl<T: Iterator> IteratorExt for T {}
