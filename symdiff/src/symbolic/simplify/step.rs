/// A step taken while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// `CONST(a) = a`
    StripConstant,

    /// `0+a = a`
    AddZero,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// Two or more numbers in a chain of sums or products were combined into one.
    FoldNumbers,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,
}
