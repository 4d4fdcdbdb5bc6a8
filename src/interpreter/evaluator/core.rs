use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::core::lookup_builtin,
        object::{Function, NULL, Object},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used inside the evaluator.
///
/// Evaluation helpers return `Err` for a runtime error so that `?` stops at
/// the first failing sub-expression. The public entry points turn that error
/// back into an [`Object::Error`] value.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Any node the evaluator accepts.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}

/// Evaluates any node against `env` and returns its value.
///
/// This is the main entry point for evaluation. It never fails: a runtime
/// error comes back as `Some(Object::Error(..))`, so callers must check the
/// result with [`Object::is_error`] before using it. `None` means the node
/// produced no value, as a trailing `let` statement does. A `return` reaching
/// this boundary is unwrapped to the value it carries.
///
/// # Example
/// ```
/// use monkey::{
///     ast::{BinaryOperator, Expression},
///     interpreter::{environment::Environment, evaluator::core::eval, object::Object},
/// };
///
/// let env = Environment::new();
/// let sum = Expression::Infix { left:     Box::new(Expression::IntegerLiteral(2)),
///                               operator: BinaryOperator::Add,
///                               right:    Box::new(Expression::IntegerLiteral(3)), };
///
/// assert_eq!(eval(&sum, &env), Some(Object::Integer(5)));
/// ```
pub fn eval<'a>(node: impl Into<Node<'a>>, env: &Rc<Environment>) -> Option<Object> {
    let result = match node.into() {
        Node::Program(program) => return eval_program(program, env),
        Node::Statement(statement) => eval_statement(statement, env),
        Node::Block(block) => eval_block(block, env),
        Node::Expression(expression) => eval_expression(expression, env).map(Some),
    };

    match result {
        Ok(Some(Object::ReturnValue(value))) => Some(*value),
        Ok(value) => value,
        Err(error) => Some(Object::Error(error)),
    }
}

/// Evaluates every statement of a program in order.
///
/// Evaluation stops at the first `return` or runtime error. A `return` is
/// unwrapped to its value; an error is returned as `Object::Error`. Otherwise
/// the value of the last statement is returned, or `None` if it produced no
/// value.
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> Option<Object> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(Some(Object::ReturnValue(value))) => return Some(*value),
            Ok(value) => result = value,
            Err(error) => return Some(Object::Error(error)),
        }
    }

    result
}

/// Evaluates a single statement.
///
/// `let` binds in the innermost scope and yields no value. `return` wraps its
/// value in `Object::ReturnValue` so enclosing blocks stop and hand it
/// upwards.
pub(crate) fn eval_statement(statement: &Statement,
                             env: &Rc<Environment>)
                             -> EvalResult<Option<Object>> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.set(name.name.as_str(), value);
            Ok(None)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Some(Object::ReturnValue(Box::new(value))))
        },
        Statement::Expression { expression } => eval_expression(expression, env).map(Some),
        Statement::Block(block) => eval_block(block, env),
    }
}

/// Evaluates a sequence of statements as a block.
///
/// Unlike [`eval_program`], a `return` is not unwrapped here: the wrapper
/// keeps travelling through nested blocks until a function call boundary
/// consumes it.
pub(crate) fn eval_block(block: &BlockStatement,
                         env: &Rc<Environment>)
                         -> EvalResult<Option<Object>> {
    let mut result = None;

    for statement in &block.statements {
        let value = eval_statement(statement, env)?;
        if matches!(value, Some(Object::ReturnValue(_))) {
            return Ok(value);
        }
        result = value;
    }

    Ok(result)
}

/// Evaluates an expression and returns the resulting value.
///
/// The evaluator dispatches on the expression variant: literals, identifiers,
/// prefix and infix operations, conditionals, function literals and calls,
/// arrays, hashes and index expressions.
pub(crate) fn eval_expression(expression: &Expression,
                              env: &Rc<Environment>)
                              -> EvalResult<Object> {
    ensure_sufficient_stack(|| eval_expression_kind(expression, env))
}

fn eval_expression_kind(expression: &Expression, env: &Rc<Environment>) -> EvalResult<Object> {
    match expression {
        Expression::IntegerLiteral(value) => Ok(Object::Integer(*value)),
        Expression::StringLiteral(value) => Ok(Object::from(value.as_str())),
        Expression::BoolLiteral(value) => Ok(Object::from(*value)),
        Expression::Identifier(identifier) => eval_identifier(&identifier.name, env),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            super::unary::eval_prefix(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            super::binary::core::eval_infix(*operator, &left, &right)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body } => {
            Ok(Object::Function(Rc::new(Function { parameters: Rc::clone(parameters),
                                                   body:       Rc::clone(body),
                                                   env:        Rc::clone(env), })))
        },
        Expression::Call { function, arguments } => {
            let function = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            super::function::core::apply_function(&function, arguments)
        },
        Expression::ArrayLiteral(elements) => super::collection::eval_array_literal(elements, env),
        Expression::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            super::collection::eval_index_expression(&left, &index)
        },
        Expression::HashLiteral(pairs) => super::collection::eval_hash_literal(pairs, env),
    }
}

/// Evaluates expressions left to right, stopping at the first error.
pub(crate) fn eval_expressions(expressions: &[Expression],
                               env: &Rc<Environment>)
                               -> EvalResult<Vec<Object>> {
    expressions.iter()
               .map(|expression| eval_expression(expression, env))
               .collect()
}

/// Resolves a name against the environment chain, then the builtin table.
fn eval_identifier(name: &str, env: &Environment) -> EvalResult<Object> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(builtin) = lookup_builtin(name) {
        return Ok(Object::Builtin(builtin));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates a conditional expression.
///
/// The consequence runs when the condition is truthy, the alternative (if any)
/// otherwise. A conditional with no branch taken, or whose branch yields no
/// value, evaluates to `null`.
fn eval_if_expression(condition: &Expression,
                      consequence: &BlockStatement,
                      alternative: Option<&BlockStatement>,
                      env: &Rc<Environment>)
                      -> EvalResult<Object> {
    let condition = eval_expression(condition, env)?;

    let result = if condition.is_truthy() {
        eval_block(consequence, env)?
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)?
    } else {
        None
    };

    Ok(result.unwrap_or(NULL))
}
