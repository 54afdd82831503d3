pub mod alias;
pub mod query_builder;
pub mod renderer;

pub use alias::AliasGenerator;
pub use query_builder::helpers::*;
pub use query_builder::{
    from, CaseBuilder, CaseValue, CaseWhen, Cond, CondExpr, Error, JoinKind, LimitedQuery,
    OrderDirection, OrderedQuery, PendingJoin, Query, Result, SelectItem, SelectQuery, Value,
    WhereQuery,
};
pub use renderer::{format_sql, format_sql_with, FormatOptions, OutputFormat, RenderOptions};
