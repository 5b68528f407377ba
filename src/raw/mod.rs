mod node;
mod order_statistic;
mod raw_symbol_table;
mod size;

pub(crate) use node::{Node, size};
pub(crate) use raw_symbol_table::RawSymbolTable;
#[cfg(test)]
pub(crate) use size::Size;
