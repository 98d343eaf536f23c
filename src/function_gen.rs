#![deny(missing_docs)]

//! # Function Generation
//!
//! Standalone assembly of TypeScript function declarations. Shares no state
//! with the interface generator.

use crate::render::INDENT_UNIT;

/// Generates a TypeScript function declaration.
///
/// `parameters` are `(name, type)` pairs in declaration order; `body` lines
/// are emitted verbatim, indented one level.
///
/// ```
/// use tsgen::generate_function;
///
/// let code = generate_function(
///     "onLeave",
///     &[("socket", "Socket"), ("callback", "(data: LeftRoomData) => void")],
///     "void",
///     &["socket.on('left_room', callback);"],
/// );
/// assert!(code.starts_with(
///     "function onLeave(socket: Socket, callback: (data: LeftRoomData) => void): void {"
/// ));
/// ```
pub fn generate_function(
    name: &str,
    parameters: &[(&str, &str)],
    return_type: &str,
    body: &[&str],
) -> String {
    let params = parameters
        .iter()
        .map(|(param, ty)| format!("{}: {}", param, ty))
        .collect::<Vec<_>>()
        .join(", ");

    let mut code = format!("function {}({}): {} {{\n", name, params, return_type);
    for line in body {
        code.push_str(&format!("{}{}\n", INDENT_UNIT, line));
    }
    code.push('}');
    code
}
