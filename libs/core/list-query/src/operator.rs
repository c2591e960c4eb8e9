use strum::{Display, EnumString};

/// Comparison operators accepted in `field[op]=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Nin,
}

impl Operator {
    pub fn mongo_operator(&self) -> &'static str {
        match self {
            Operator::Eq => "$eq",
            Operator::Ne => "$ne",
            Operator::Gt => "$gt",
            Operator::Gte => "$gte",
            Operator::Lt => "$lt",
            Operator::Lte => "$lte",
            Operator::In => "$in",
            Operator::Nin => "$nin",
        }
    }

    /// `in` and `nin` take a comma-separated list.
    pub fn takes_list(&self) -> bool {
        matches!(self, Operator::In | Operator::Nin)
    }
}

/// Operators an endpoint accepts in bracket form. Plain `field=value`
/// equality is always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSet {
    /// `gt`, `gte`, `lt`, `lte`
    Comparison,
    /// Comparison plus `eq`, `ne`, `in`, `nin`
    Extended,
}

impl OperatorSet {
    pub fn allows(&self, op: Operator) -> bool {
        match self {
            OperatorSet::Comparison => {
                matches!(op, Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte)
            }
            OperatorSet::Extended => true,
        }
    }
}
