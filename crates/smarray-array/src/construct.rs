//! Choosing between fill and range construction from an argument pair.
//!
//! A two-argument constructor is ambiguous: `(5, 7)` could be "five sevens"
//! or "the range between positions 5 and 7". [`ConstructArgs`] resolves it
//! by argument category at compile time. A pair of integers always means
//! FILL (count, value); a sequence with two endpoint cursors means RANGE.

use smarray_cursor::{RandomAccessCursor, Sequence};

use crate::array::DynArray;
use crate::config::GrowthPolicy;

/// Which construction an argument set resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InitKind {
    /// `count` copies of a value.
    Fill,
    /// Elements copied from a cursor range.
    Range,
}

/// Argument sets accepted by [`DynArray::construct`].
///
/// A FILL pair must use one integer type for both the count and the value,
/// and the element type must implement `From` that integer. Mixed pairs or
/// lossy conversions are rejected at compile time rather than converted:
///
/// ```compile_fail
/// use smarray_array::DynArray;
///
/// // `i32: From<usize>` does not hold.
/// let array: DynArray<i32> = DynArray::construct((3_usize, 5_usize));
/// ```
///
/// Use [`DynArray::with_value`] when the count and value types differ.
pub trait ConstructArgs<T> {
    /// The construction these arguments select.
    const KIND: InitKind;

    /// Build the array, growing by `policy`.
    fn build(self, policy: GrowthPolicy) -> DynArray<T>;
}

macro_rules! integral_fill {
    ($($int:ty),* $(,)?) => {
        $(
            /// `(count, value)`: FILL. A negative count builds an empty
            /// (but allocated) array.
            impl<T> ConstructArgs<T> for ($int, $int)
            where
                T: Clone + Default + From<$int>,
            {
                const KIND: InitKind = InitKind::Fill;

                fn build(self, policy: GrowthPolicy) -> DynArray<T> {
                    let (count, value) = self;
                    let count = usize::try_from(count).unwrap_or(0);
                    DynArray::with_value_in(count, T::from(value), policy)
                }
            }
        )*
    };
}

integral_fill!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// `(sequence, first, last)`: RANGE over `[first, last)`.
impl<S, C> ConstructArgs<C::Item> for (&S, C, C)
where
    S: Sequence<Item = C::Item> + ?Sized,
    C: RandomAccessCursor,
    C::Item: Clone + Default,
{
    const KIND: InitKind = InitKind::Range;

    fn build(self, policy: GrowthPolicy) -> DynArray<C::Item> {
        let (seq, first, last) = self;
        DynArray::from_range_in(seq, first, last, policy)
    }
}

impl<T> DynArray<T> {
    /// Construct from an argument set, dispatching on its category.
    ///
    /// ```
    /// use smarray_array::DynArray;
    /// use smarray_cursor::Sequence;
    ///
    /// let sevens: DynArray<i32> = DynArray::construct((5_i32, 7_i32));
    /// assert_eq!(sevens.as_slice(), [7, 7, 7, 7, 7]);
    ///
    /// let src = [1, 2, 3, 4];
    /// let middle = DynArray::construct((&src, src.begin_cursor() + 1, src.begin_cursor() + 3));
    /// assert_eq!(middle.as_slice(), [2, 3]);
    /// ```
    pub fn construct<A: ConstructArgs<T>>(args: A) -> Self {
        args.build(GrowthPolicy::default())
    }

    /// The construction `A` would select.
    pub const fn init_kind<A: ConstructArgs<T>>() -> InitKind {
        A::KIND
    }
}
