use easy_ext::ext;

#[ext(ErrorExt)]
pub(crate) impl<E> E
where
    E: std::error::Error + ?Sized,
{
    fn display_chain(&self) -> display_error_chain::DisplayErrorChain<&Self> {
        display_error_chain::DisplayErrorChain::new(self)
    }
}

#[ext(IntoIteratorExt)]
pub(crate) impl<T: IntoIterator> T {
    fn map_collect<C, R>(self, map: impl FnMut(Self::Item) -> R) -> C
    where
        C: FromIterator<R>,
        Self: Sized,
    {
        self.into_iter().map(map).collect()
    }
}

#[ext(StrExt)]
pub(crate) impl str {
    /// Cuts the string down to at most `max` characters. Unlike slicing
    /// with `[..max]` this can not panic in the middle of a code point.
    fn truncate_chars(&self, max: usize) -> &str {
        match self.char_indices().nth(max) {
            Some((index, _)) => &self[..index],
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!("Omega Speedmaster".truncate_chars(5), "Omega");
        assert_eq!("short".truncate_chars(60), "short");
        assert_eq!("Journe Élégante".truncate_chars(8), "Journe É");
        assert_eq!("".truncate_chars(3), "");
    }
}
