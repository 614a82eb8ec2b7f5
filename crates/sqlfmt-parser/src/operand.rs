//! What counts as a valid operand to the right of an operator,
//! comparator, member-access period, or inside an identifier list.
//! Shared across the passes that need it so the acceptance rule stays in
//! one place.

use sqlfmt_ast::{Node, NodeKind};

/// Numbers, strings, identifiers (plain and qualified), parenthesized
/// expressions, function calls, and already-fused operator/comparison
/// expressions -- the operand shapes spec.md §4.4 lists for operators,
/// comparisons, and member access.
pub fn is_operand_like(node: &Node) -> bool {
    matches!(
        node.kind(),
        NodeKind::Identifer
            | NodeKind::MemberIdentifer
            | NodeKind::Parenthesis
            | NodeKind::FunctionLiteral
            | NodeKind::Operator
            | NodeKind::Comparison
    ) || matches!(node.as_item(), Some(t) if t.kind.is_literal())
}

/// Comparison targets additionally accept the keywords `TRUE`/`FALSE`.
pub fn is_comparison_operand(node: &Node) -> bool {
    is_operand_like(node)
        || matches!(
            node.as_item(),
            Some(t) if t.is_ident() && (t.text.eq_ignore_ascii_case("TRUE") || t.text.eq_ignore_ascii_case("FALSE"))
        )
}

/// Identifier-list elements additionally accept `Aliased`, `SwitchCase`.
pub fn is_list_element(node: &Node) -> bool {
    is_operand_like(node) || matches!(node.kind(), NodeKind::Aliased | NodeKind::SwitchCase)
}
