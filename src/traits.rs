use crate::{List, ListBuilder, ListError};

/// Implements collect to growable lists, reporting allocation failure instead of aborting.
pub trait ListIterator: Iterator {
    fn collect_list(self, builder: &ListBuilder) -> Result<List<Self::Item>, ListError>;

    fn collect_result_list<I, E>(self, builder: &ListBuilder) -> Result<List<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            E: From<ListError>;
}

impl<Q: Iterator> ListIterator for Q {
    fn collect_list(self, builder: &ListBuilder) -> Result<List<Self::Item>, ListError> {
        let (lower, _) = self.size_hint();
        let mut list = builder.build();
        list.reserve(lower)?;
        for item in self {
            list.append(item)?;
        }
        Ok(list)
    }

    fn collect_result_list<I, E>(self, builder: &ListBuilder) -> Result<List<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            E: From<ListError>
    {
        let (lower, _) = self.size_hint();
        let mut list = builder.build();
        list.reserve(lower)?;
        for item in self {
            list.append(item?)?;
        }
        Ok(list)
    }
}

#[cfg(test)]
mod traits_tests {
    use crate::{ListBuilder, ListError, ListIterator};

    #[test]
    fn test_collect() {
        let builder = ListBuilder::new();
        let items = (0..12)
            .map(|v| v as i16)
            .collect_list(&builder).unwrap()
            .iter()
            .map(|i| *i * 2)
            .collect_list(&builder)
            .unwrap();

        assert_eq!(12, items.len());
        for (i, (item, expected)) in items.iter().zip((0..12).map(|v| v as i16 * 2)).enumerate() {
            assert_eq!(*item, expected, "at index {}", i);
        }
    }

    #[test]
    fn collect_reserves_from_size_hint() {
        let items = (0..50).collect_list(&ListBuilder::new().initial_capacity(50)).unwrap();
        assert_eq!(50, items.capacity());
    }

    #[derive(Debug, PartialEq)]
    enum ParseError {
        List(ListError),
        Bad(&'static str),
    }

    impl From<ListError> for ParseError {
        fn from(e: ListError) -> Self {
            ParseError::List(e)
        }
    }

    #[test]
    fn collect_result_stops_at_first_error() {
        let builder = ListBuilder::new();
        let input: Vec<Result<i32, ParseError>> = vec![Ok(1), Ok(2)];
        let ok = input.into_iter().collect_result_list(&builder).unwrap();
        assert_eq!(ok, [1, 2]);

        let input: Vec<Result<i32, ParseError>> = vec![Ok(1), Err(ParseError::Bad("two")), Ok(3)];
        let err = input.into_iter().collect_result_list(&builder);
        assert_eq!(Err(ParseError::Bad("two")), err.map(|l| l.len()));
    }
}
