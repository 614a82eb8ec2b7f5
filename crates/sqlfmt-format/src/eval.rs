//! `Eval`: the single tree rewrite that turns a parsed node into its
//! formatted form, threading the live indent counter through a recursive
//! walk. Dispatch is by node variant; a generic list that has no
//! dedicated rule falls through to [`eval_list`].
//!
//! Leaves are rewritten into `Formatted` wrappers carrying their
//! prefix/suffix decoration; every caller that receives an evaluated child
//! back must inline a `Formatted` result into its own child stream rather
//! than nesting it, so the decorations merge into whichever list they
//! were produced for. `inline_into` is the one place that happens.

use sqlfmt_ast::{ListNode, Node, NodeReader};
use sqlfmt_common::dialect::Dialect;
use sqlfmt_common::token::{Token, TokenKind};

use crate::env::FormatEnvironment;

const OUTDENT_LINEBREAK_BEFORE: &[&str] =
    &["FROM", "INTO", "VALUES", "JOIN", "WHERE", "HAVING", "LIMIT", "UNION", "SET", "EXCEPT", "END"];
const INDENT_LINEBREAK_BEFORE: &[&str] = &["ON"];
const LINEBREAK_BEFORE: &[&str] = &["AND", "OR", "WHEN", "ELSE"];
const LINEBREAK_INDENT_AFTER: &[&str] = &["SELECT", "INSERT", "FROM", "VALUES", "INTO", "SET", "WHERE", "HAVING"];
const INDENT_AFTER: &[&str] = &["CASE"];

pub fn eval(node: &Node, env: &mut FormatEnvironment, dialect: &dyn Dialect) -> Node {
    match node {
        Node::Item(tok) => eval_item(tok, env),
        Node::Operator(list) => {
            let view = list.as_binary();
            eval_binary(view.left, view.operator, view.right, env, dialect, Node::Operator)
        }
        Node::Comparison(list) => {
            let view = list.as_binary();
            eval_binary(view.left, view.operator, view.right, env, dialect, Node::Comparison)
        }
        Node::Aliased(list) => eval_aliased(list, env, dialect),
        Node::MemberIdentifer(list) => eval_member(list, env, dialect),
        Node::Parenthesis(list) => eval_parenthesis(list, env, dialect),
        Node::IdentiferList(list) => eval_identifier_list(list, env, dialect, false),
        Node::MultiKeyword(list) => eval_multi_keyword(list, env),
        // Function calls and already-promoted plain identifiers are
        // preserved exactly as written; only their enclosing context (e.g.
        // a surrounding Aliased or Operator) is reformatted.
        Node::FunctionLiteral(_) | Node::Identifer(_) => node.clone(),
        _ => eval_list(node, env, dialect),
    }
}

/// Fold `evaluated` into `out`, flattening a `Formatted` wrapper's own
/// children into the caller's stream instead of nesting it.
fn inline_into(out: &mut Vec<Node>, evaluated: Node) {
    match evaluated {
        Node::Formatted(list) => out.extend(list.children),
        other => out.push(other),
    }
}

fn eval_sequence(nodes: &[Node], env: &mut FormatEnvironment, dialect: &dyn Dialect) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut reader = NodeReader::new(nodes);
    while reader.next_node(false) {
        let evaluated = eval(reader.cur().expect("next_node just returned true"), env, dialect);
        inline_into(&mut out, evaluated);
    }
    out
}

/// `Query`, `Statement`, `SwitchCase`, and anything else without a
/// dedicated structural rule: walk the children via a [`NodeReader`],
/// evaluate each, inline any `Formatted` results, and rebuild the same
/// variant.
fn eval_list(node: &Node, env: &mut FormatEnvironment, dialect: &dyn Dialect) -> Node {
    let children = node.children().unwrap_or(&[]);
    let rebuilt = eval_sequence(children, env, dialect);
    node.with_children(rebuilt)
}

fn eval_item(tok: &Token, env: &mut FormatEnvironment) -> Node {
    // Original inter-token whitespace carries no canonical meaning -- it
    // is re-synthesized as a single space here and trimmed away entirely
    // by the trailing-whitespace pass wherever a decoration already
    // supplies a line break in its place.
    if tok.kind == TokenKind::Whitespace {
        return Node::Formatted(ListNode::new(vec![env.space()]));
    }

    let mut prefix = Vec::new();
    let mut suffix = Vec::new();
    let upper = tok.text.to_ascii_uppercase();
    let is_keyword_text = tok.is_ident();

    if is_keyword_text && OUTDENT_LINEBREAK_BEFORE.contains(&upper.as_str()) {
        env.outdent();
        prefix.push(env.linebreak());
        prefix.push(env.get_indent());
    }
    if is_keyword_text && INDENT_LINEBREAK_BEFORE.contains(&upper.as_str()) {
        env.indent();
        prefix.push(env.linebreak());
        prefix.push(env.get_indent());
    }
    if is_keyword_text && LINEBREAK_BEFORE.contains(&upper.as_str()) {
        prefix.push(env.linebreak());
        prefix.push(env.get_indent());
    }
    if (is_keyword_text && LINEBREAK_INDENT_AFTER.contains(&upper.as_str())) || tok.kind == TokenKind::LeftParen {
        suffix.push(env.linebreak());
        env.indent();
        suffix.push(env.get_indent());
    }
    if is_keyword_text && INDENT_AFTER.contains(&upper.as_str()) {
        env.indent();
    }
    if tok.kind == TokenKind::Comma {
        suffix.push(env.linebreak());
        suffix.push(env.get_indent());
    }

    let mut children = prefix;
    children.push(Node::Item(tok.clone()));
    children.extend(suffix);
    Node::Formatted(ListNode::new(children))
}

const JOIN_ROSTER_TAIL: &str = "JOIN";
const BY_ROSTER_TAIL: &str = "BY";

fn eval_multi_keyword(list: &ListNode, env: &mut FormatEnvironment) -> Node {
    let keywords = list.keywords();
    let last_upper = keywords.last().map(|t| t.text.to_ascii_uppercase());
    let is_join_family = last_upper.as_deref() == Some(JOIN_ROSTER_TAIL);
    let is_by_family = last_upper.as_deref() == Some(BY_ROSTER_TAIL);

    let mut prefix = Vec::new();
    let mut suffix = Vec::new();

    if is_join_family || is_by_family {
        env.outdent();
        prefix.push(env.linebreak());
        prefix.push(env.get_indent());
    }
    if is_by_family {
        suffix.push(env.linebreak());
        env.indent();
        suffix.push(env.get_indent());
    }

    // Each keyword stays its own `Item` rather than being joined into one
    // combined token: render's per-token keyword lowercasing looks up one
    // whole token's text at a time, and a joined "INNER JOIN" would never
    // match any single dialect keyword entry. The space between keywords
    // is synthesized the same way eval_item synthesizes every other
    // inter-token gap; no trailing separator is baked in after the last
    // keyword -- the original whitespace that followed the roster in the
    // source survives the generic list walk and supplies it (e.g. "JOIN"
    // + " " + "u"), the same way it does between any other two siblings.
    let mut children = prefix;
    for (i, tok) in keywords.iter().enumerate() {
        if i > 0 {
            children.push(env.space());
        }
        children.push(Node::Item((*tok).clone()));
    }
    children.extend(suffix);
    Node::Formatted(ListNode::new(children))
}

fn eval_binary(
    left: &Node,
    operator: &Token,
    right: Option<&Node>,
    env: &mut FormatEnvironment,
    dialect: &dyn Dialect,
    ctor: fn(ListNode) -> Node,
) -> Node {
    let mut children = Vec::new();
    inline_into(&mut children, eval(left, env, dialect));
    children.push(env.space());
    children.push(Node::Item(operator.clone()));
    if let Some(right) = right {
        children.push(env.space());
        inline_into(&mut children, eval(right, env, dialect));
    }
    ctor(ListNode::new(children))
}

fn eval_aliased(list: &ListNode, env: &mut FormatEnvironment, dialect: &dyn Dialect) -> Node {
    let view = list.as_aliased();
    let mut children = Vec::new();
    inline_into(&mut children, eval(view.real, env, dialect));
    children.push(env.space());
    if let Some(as_tok) = view.as_token {
        children.push(Node::Item(as_tok.clone()));
        children.push(env.space());
    }
    inline_into(&mut children, eval(view.aliased, env, dialect));
    Node::Aliased(ListNode::new(children))
}

fn eval_member(list: &ListNode, env: &mut FormatEnvironment, dialect: &dyn Dialect) -> Node {
    let period = list
        .children
        .iter()
        .find_map(|c| c.as_item().filter(|t| t.kind == TokenKind::Period))
        .cloned()
        .expect("member identifier always carries a period token");
    let view = list.as_member();
    let mut children = Vec::new();
    if let Some(parent) = view.parent {
        inline_into(&mut children, eval(parent, env, dialect));
    }
    children.push(Node::Item(period));
    if let Some(child) = view.child {
        inline_into(&mut children, eval(child, env, dialect));
    }
    Node::MemberIdentifer(ListNode::new(children))
}

fn eval_parenthesis(list: &ListNode, env: &mut FormatEnvironment, dialect: &dyn Dialect) -> Node {
    let left_paren = list.children[0].clone();
    let right_paren = list.is_balanced().then(|| list.children.last().cloned().unwrap());
    let inner = list.paren_inner();

    let first_significant = inner.iter().find(|c| !c.is_whitespace());
    let is_subquery = matches!(
        first_significant.and_then(|n| n.as_item()),
        Some(t) if t.is_ident() && t.text.eq_ignore_ascii_case("SELECT")
    );
    let is_inline_list = matches!(first_significant, Some(Node::IdentiferList(_)));

    let mut children = vec![left_paren];

    if is_subquery {
        let saved_indent = env.indent_level();
        env.indent();
        children.push(env.linebreak());
        children.push(env.get_indent());
        children.extend(eval_sequence(inner, env, dialect));
        env.set_indent_level(saved_indent);
        children.push(env.linebreak());
        children.push(env.get_indent());
    } else if is_inline_list {
        for node in inner {
            let evaluated = match node {
                Node::IdentiferList(l) => eval_identifier_list(l, env, dialect, true),
                other => eval(other, env, dialect),
            };
            inline_into(&mut children, evaluated);
        }
    } else {
        children.extend(eval_sequence(inner, env, dialect));
    }

    if let Some(rp) = right_paren {
        children.push(rp);
    }

    Node::Parenthesis(ListNode::new(children))
}

/// `inline = true` joins elements with `, ` on a single line (used inside
/// a parenthesis whose whole body is one list); otherwise each element
/// starts a new line at the current indent.
fn eval_identifier_list(list: &ListNode, env: &mut FormatEnvironment, dialect: &dyn Dialect, inline: bool) -> Node {
    let mut out = Vec::new();
    let mut first = true;
    for child in &list.children {
        if child.is_whitespace() {
            continue;
        }
        if matches!(child.as_item(), Some(t) if t.kind == TokenKind::Comma) {
            // The dangling comma of a partial trailing tail is dropped;
            // every other comma is regenerated as a separator below.
            continue;
        }
        if !first {
            children_separator(&mut out, env, inline);
        }
        inline_into(&mut out, eval(child, env, dialect));
        first = false;
    }
    Node::IdentiferList(ListNode::new(out))
}

fn children_separator(out: &mut Vec<Node>, env: &mut FormatEnvironment, inline: bool) {
    out.push(Node::Item(Token::new(
        TokenKind::Comma,
        ",",
        sqlfmt_common::position::Position::new(0, 0),
        sqlfmt_common::position::Position::new(0, 0),
    )));
    if inline {
        out.push(env.space());
    } else {
        out.push(env.linebreak());
        out.push(env.get_indent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_common::dialect::AnsiDialect;
    use sqlfmt_common::FormatOptions;

    fn parse(src: &str) -> Node {
        let tokens = sqlfmt_lexer::tokenize(src).unwrap();
        sqlfmt_parser::parse(tokens, &AnsiDialect)
    }

    fn env() -> FormatEnvironment {
        FormatEnvironment::new(FormatOptions::default())
    }

    #[test]
    fn select_from_inserts_linebreak_and_outdents() {
        let tree = parse("SELECT a FROM t");
        let mut env = env();
        let result = eval(&tree, &mut env, &AnsiDialect);
        let rendered = result.raw_text();
        assert!(rendered.contains('\n'));
        // FROM's own suffix is the last mutation in this statement, so the
        // walk ends one level deep rather than back at zero.
        assert_eq!(env.indent_level(), 1);
    }

    #[test]
    fn case_end_round_trips_indent_level() {
        let tree = parse("SELECT CASE WHEN a = 1 THEN b ELSE c END FROM t");
        let mut env = env();
        eval(&tree, &mut env, &AnsiDialect);
        // CASE/END net to zero around the switch itself; the trailing FROM
        // still leaves the walk one level deep, same as the plain case.
        assert_eq!(env.indent_level(), 1);
    }

    #[test]
    fn subquery_parenthesis_restores_pre_entry_indent() {
        let tree = parse("SELECT * FROM (SELECT a FROM t) s");
        let mut env = env();
        eval(&tree, &mut env, &AnsiDialect);
        // The subquery's own nesting is fully unwound on exit, restoring
        // the level FROM's suffix had set before the parenthesis began.
        assert_eq!(env.indent_level(), 1);
    }
}
