//! Literal macros for the collection wrappers.

/// Creates an [`Slist`](crate::collection::Slist) from its elements.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let empty: Slist<i32> = slist![];
/// assert!(empty.is_empty());
/// assert_eq!(slist![1, 2, 3].len(), 3);
/// assert_eq!(slist![0; 4], slist![0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! slist {
    () => {
        $crate::collection::Slist::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collection::Slist::from(::std::vec![$value; $count])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collection::Slist::from([$($value),+])
    };
}

/// Creates an [`Sset`](crate::collection::Sset) with the current factory's layout.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let set = sset![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
/// ```
#[macro_export]
macro_rules! sset {
    () => {
        $crate::collection::Sset::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut set = $crate::collection::Sset::new();
        $( $crate::collection::Pushable::push(&mut set, $value); )+
        set
    }};
}

/// Creates an [`Smap`](crate::collection::Smap) with the current factory's layout.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let ages = smap! { "ann" => 31, "bob" => 27 };
/// assert_eq!(ages.opt(&"bob"), Opt::of(&27));
/// ```
#[macro_export]
macro_rules! smap {
    () => {
        $crate::collection::Smap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::collection::Smap::new();
        $( map.push($key, $value); )+
        map
    }};
}
