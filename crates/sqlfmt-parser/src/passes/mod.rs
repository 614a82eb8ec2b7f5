pub mod alias_with_as;
pub mod alias_without_as;
pub mod case_blocks;
pub mod comparisons;
pub mod functions;
pub mod identifier_list;
pub mod identifiers;
pub mod member_identifiers;
pub mod multi_keyword;
pub mod operators;
pub mod paren_inner;
pub mod parentheses;
pub mod statements;
