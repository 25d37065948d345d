use tracing::debug;

use crate::{
    ast::{
        ast::{Expression, Statement},
        statements::{
            Assignment, Block, Case, Declaration, IfElseBlock, Import, Loop, LoopHeader, Return,
            Switch, SwitchHeader,
        },
    },
    errors::errors::Error,
    lexer::tokens::{SubKind, TokenKind},
};

use super::{
    expr::{parse_expr, parse_expr_array},
    parser::Parser,
    types::{parse_enum_type, parse_struct_type, parse_tuple_type, parse_type_list},
};

/// Parses one top-level statement, including its terminating `;`.
pub fn parse_global_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token_kind = parser.current_token_kind()?;
    let handler = parser.get_global_lookup().get(&token_kind).copied();

    let statement = match handler {
        Some(global_fn) => global_fn(parser)?,
        None => return Err(parser.unexpected("a top-level statement")?),
    };

    parser.expect(TokenKind::Semicolon)?;

    debug!(
        kind = %statement.get_stmt_type(),
        line = statement.get_span().start.line,
        "parsed global statement"
    );

    Ok(statement)
}

/// Parses one statement inside a block or a control flow header.
///
/// Keyword-led statements dispatch directly. Anything else starts with an
/// expression, and the token after it decides what the statement really is:
///
/// - an assignment operator: `a = 1`, `a++`
/// - `,`: either `a, b = 1, 2` or `a, b: int`, see [`parse_declaration_or_assignment`]
/// - `:`: `a: int = 1`
/// - anything else: the expression is the statement
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token_kind = parser.current_token_kind()?;
    let handler = parser.get_stmt_lookup().get(&token_kind).copied();

    if let Some(stmt_fn) = handler {
        return stmt_fn(parser);
    }

    let checkpoint = parser.mark();
    let expr = parse_expr(parser)?;

    match parser.current_token_kind()? {
        TokenKind::AssignmentOperator => {
            debug!("statement is an assignment");
            parser.reset(checkpoint);
            parse_assignment(parser)
        }
        TokenKind::Comma => {
            parser.reset(checkpoint);
            parse_declaration_or_assignment(parser)
        }
        TokenKind::Colon => {
            debug!("statement is a declaration");
            parser.reset(checkpoint);
            parse_declaration(parser)
        }
        _ => Ok(Statement::Expression(expr)),
    }
}

/// Decides between `a, b = ...` and `a, b: ...` by scanning ahead.
pub fn parse_declaration_or_assignment(parser: &mut Parser) -> Result<Statement, Error> {
    let checkpoint = parser.mark();

    loop {
        match parser.current_token_kind()? {
            TokenKind::AssignmentOperator => {
                debug!("multi-target statement is an assignment");
                parser.reset(checkpoint);
                return parse_assignment(parser);
            }
            TokenKind::Colon => {
                debug!("multi-target statement is a declaration");
                parser.reset(checkpoint);
                return parse_declaration(parser);
            }
            TokenKind::Semicolon
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::EOF => {
                return Err(parser.unexpected("an assignment operator or Colon")?);
            }
            _ => {
                parser.advance()?;
            }
        }
    }
}

/// `import "path"` or `import ("a", "b",)`
pub fn parse_import_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.expect(TokenKind::Import)?.span.start;
    let mut paths = vec![];

    if parser.eat(TokenKind::OpenParen)? {
        while parser.current_token_kind()? != TokenKind::CloseParen {
            paths.push(parser.expect(TokenKind::String)?);

            if !parser.eat(TokenKind::Comma)? {
                break;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    } else {
        paths.push(parser.expect(TokenKind::String)?);
    }

    Ok(Statement::Import(Import {
        paths,
        span: parser.span_from(start),
    }))
}

/// `a, b: T1, T2 = e1, e2`, where either the types or the values may be left out.
pub fn parse_declaration(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position()?;

    let mut identifiers = vec![parser.expect(TokenKind::Identifier)?];
    while parser.eat(TokenKind::Comma)? {
        identifiers.push(parser.expect(TokenKind::Identifier)?);
    }

    parser.expect(TokenKind::Colon)?;

    let types = if parser.current_token()?.is_plain_assign() {
        vec![]
    } else {
        parse_type_list(parser)?
    };

    let values = if parser.current_token()?.is_plain_assign() {
        parser.advance()?;
        parse_expr_array(parser)?
    } else {
        vec![]
    };

    Ok(Statement::Declaration(Declaration {
        identifiers,
        types,
        values,
        span: parser.span_from(start),
    }))
}

pub fn parse_assignment(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position()?;
    let variables = parse_expr_array(parser)?;

    let op = parser.expect(TokenKind::AssignmentOperator)?;

    let values = if op.is_sub(SubKind::Increment) || op.is_sub(SubKind::Decrement) {
        vec![]
    } else {
        parse_expr_array(parser)?
    };

    Ok(Statement::Assignment(Assignment {
        variables,
        op,
        values,
        span: parser.span_from(start),
    }))
}

/// Turns a header statement into the condition it has to be.
fn expect_expression(statement: Statement) -> Result<Expression, Error> {
    statement.into_expression().map_err(|statement| {
        Error::syntax(
            "an expression",
            format!("{} statement", statement.get_stmt_type()),
            statement.get_span().start.clone(),
        )
    })
}

/// `if [init;] cond { } [else if cond { }]* [else { }]`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let statement = parse_stmt(parser)?;
    let (init, condition) = if parser.eat(TokenKind::Semicolon)? {
        (Some(Box::new(statement)), parse_expr(parser)?)
    } else {
        (None, expect_expression(statement)?)
    };

    let mut conditions = vec![condition];
    let mut blocks = vec![parse_block(parser)?];
    let mut else_block = None;

    while parser.eat(TokenKind::Else)? {
        if parser.eat(TokenKind::If)? {
            conditions.push(parse_expr(parser)?);
            blocks.push(parse_block(parser)?);
        } else {
            else_block = Some(parse_block(parser)?);
            break;
        }
    }

    Ok(Statement::IfElse(IfElseBlock {
        init,
        conditions,
        blocks,
        else_block,
        span: parser.span_from(start),
    }))
}

/// `for [init;] [cond] [; post] { }`
pub fn parse_loop_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.expect(TokenKind::For)?.span.start;

    let header = if parser.current_token_kind()? == TokenKind::OpenCurly {
        LoopHeader::None
    } else {
        let statement = parse_stmt(parser)?;

        if parser.eat(TokenKind::Semicolon)? {
            let init = Box::new(statement);
            let condition = parse_expr(parser)?;

            // `init; cond;` with nothing after the second `;` has no post statement
            if parser.eat(TokenKind::Semicolon)?
                && parser.current_token_kind()? != TokenKind::OpenCurly
            {
                LoopHeader::InitCondLoop {
                    init,
                    condition,
                    post: Box::new(parse_stmt(parser)?),
                }
            } else {
                LoopHeader::InitCond { init, condition }
            }
        } else {
            LoopHeader::Cond(expect_expression(statement)?)
        }
    };

    let block = parse_block(parser)?;

    Ok(Statement::Loop(Loop {
        header,
        block,
        span: parser.span_from(start),
    }))
}

/// `switch [init;] [cond] { case e: ... default: ... }`
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.expect(TokenKind::Switch)?.span.start;

    let header = if parser.current_token_kind()? == TokenKind::OpenCurly {
        SwitchHeader::None
    } else {
        let statement = parse_stmt(parser)?;

        if parser.eat(TokenKind::Semicolon)? {
            let init = Box::new(statement);

            if parser.current_token_kind()? == TokenKind::OpenCurly {
                SwitchHeader::Init(init)
            } else {
                let condition = expect_expression(parse_stmt(parser)?)?;
                SwitchHeader::InitCond { init, condition }
            }
        } else {
            SwitchHeader::Cond(expect_expression(statement)?)
        }
    };

    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = vec![];
    let mut default = None;

    loop {
        match parser.current_token_kind()? {
            TokenKind::CloseCurly => break,
            // Only `}` may follow the default section
            TokenKind::Case | TokenKind::Default if default.is_some() => {
                return Err(parser.unexpected(TokenKind::CloseCurly.to_string())?);
            }
            TokenKind::Case => {
                let case_start = parser.advance()?.span.start;
                let condition = parse_expr(parser)?;
                parser.expect(TokenKind::Colon)?;
                let statements = parse_case_body(parser)?;

                cases.push(Case {
                    condition,
                    statements,
                    span: parser.span_from(case_start),
                });
            }
            TokenKind::Default => {
                let default_start = parser.advance()?.span.start;
                parser.expect(TokenKind::Colon)?;
                let statements = parse_case_body(parser)?;

                default = Some(Block {
                    statements,
                    span: parser.span_from(default_start),
                });
            }
            _ => return Err(parser.unexpected("Case, Default or CloseCurly")?),
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Statement::Switch(Switch {
        header,
        cases,
        default,
        span: parser.span_from(start),
    }))
}

/// Statements of one switch section, up to the next `case`, `default` or `}`.
fn parse_case_body(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    let mut statements = vec![];

    loop {
        match parser.current_token_kind()? {
            TokenKind::Case | TokenKind::Default | TokenKind::CloseCurly => break,
            TokenKind::Semicolon => {
                parser.advance()?;
            }
            _ => statements.push(parse_stmt(parser)?),
        }
    }

    Ok(statements)
}

/// `{ stmt [;] stmt [;] ... }`
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    let mut statements = vec![];

    while parser.current_token_kind()? != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
        parser.eat(TokenKind::Semicolon)?;
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Block {
        statements,
        span: parser.span_from(start),
    })
}

/// A nested block statement, which needs its own `;`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let block = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Block(block))
}

/// `return e1, e2;`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;
    let values = parse_expr_array(parser)?;
    let span = parser.span_from(start);

    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Return(Return { values, span }))
}

pub fn parse_struct_typedef(parser: &mut Parser) -> Result<Statement, Error> {
    Ok(Statement::Struct(parse_struct_type(parser, false)?))
}

pub fn parse_enum_typedef(parser: &mut Parser) -> Result<Statement, Error> {
    Ok(Statement::Enum(parse_enum_type(parser)?))
}

pub fn parse_tuple_typedef(parser: &mut Parser) -> Result<Statement, Error> {
    Ok(Statement::Tuple(parse_tuple_type(parser, false)?))
}
