use crate::expr::{Expr, LiteralValue};
use crate::stmt::Stmt;

/// Renders the AST in parenthesised prefix form, one string per statement.
///
/// `for` loops show up in their desugared `block`/`while` shape.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(statements: &[Stmt]) -> Vec<String> {
        statements.iter().map(Self::stmt).collect()
    }

    pub fn stmt(stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(expr) => format!("(expr {})", Self::expr(expr)),

            Stmt::Print(expr) => format!("(print {})", Self::expr(expr)),

            Stmt::Var { name, initializer } => format!(
                "(vardecl {} {})",
                name.lexeme,
                initializer.as_ref().map_or("nil".into(), Self::expr)
            ),

            Stmt::Block(statements) => Self::parenthesize("block", statements.iter().map(Self::stmt)),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => format!(
                "(if {} {} {})",
                Self::expr(condition),
                Self::stmt(then_branch),
                else_branch.as_deref().map_or("nil".into(), Self::stmt)
            ),

            Stmt::While { condition, body } => {
                format!("(while {} {})", Self::expr(condition), Self::stmt(body))
            }

            Stmt::Function(declaration) => {
                let params: Vec<&str> = declaration.params.iter().map(|p| p.lexeme.as_str()).collect();
                let mut s = format!("(fun {} ({})", declaration.name.lexeme, params.join(" "));
                for stmt in &declaration.body {
                    s.push(' ');
                    s.push_str(&Self::stmt(stmt));
                }
                s.push(')');
                s
            }

            Stmt::Return { value, .. } => format!(
                "(return {})",
                value.as_ref().map_or("nil".into(), Self::expr)
            ),
        }
    }

    pub fn expr(expr: &Expr) -> String {
        match expr {
            // ── literals ────────────────────────────────────────────────
            Expr::Literal(lit) => match lit {
                LiteralValue::True => "true".into(),

                LiteralValue::False => "false".into(),

                LiteralValue::Nil => "nil".into(),

                LiteralValue::Str(s) => s.clone(),

                LiteralValue::Number(n) => {
                    if n.fract() == 0.0 {
                        // 3 → 3.0
                        format!("{:.1}", n)
                    } else {
                        n.to_string()
                    }
                }
            },

            Expr::Grouping(inner) => format!("(group {})", Self::expr(inner)),

            Expr::Unary { operator, right } => {
                format!("({} {})", operator.lexeme, Self::expr(right))
            }

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "({} {} {})",
                operator.lexeme,
                Self::expr(left),
                Self::expr(right)
            ),

            Expr::Variable { name, .. } => name.lexeme.clone(),

            Expr::Assign { name, value, .. } => {
                format!("(assign {} {})", name.lexeme, Self::expr(value))
            }

            Expr::Call {
                callee, arguments, ..
            } => Self::parenthesize(
                "call",
                std::iter::once(Self::expr(callee)).chain(arguments.iter().map(Self::expr)),
            ),
        }
    }

    fn parenthesize<I: Iterator<Item = String>>(name: &str, parts: I) -> String {
        let mut s = format!("({}", name);
        for part in parts {
            s.push(' ');
            s.push_str(&part);
        }
        s.push(')');
        s
    }
}
