use crate::{
    ast::{
        ast::Expression,
        expressions::{Argument, BasicLit, FunctionCall, FunctionExpression, LiteralType},
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    parser::Parser,
    stmt::parse_block,
    types::{parse_function_modifiers, parse_type, parse_type_array},
};

/// Parses one expression.
///
/// A token without a NUD handler is taken as a literal on its own. Only end
/// of input is rejected.
pub fn parse_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token_kind = parser.current_token_kind()?;
    let handler = parser.get_nud_lookup().get(&token_kind).copied();

    match handler {
        Some(nud_fn) => nud_fn(parser),
        None if token_kind == TokenKind::EOF => Err(parser.unexpected("an expression")?),
        None => parse_basic_lit(parser),
    }
}

/// One or more comma separated expressions.
pub fn parse_expr_array(parser: &mut Parser) -> Result<Vec<Expression>, Error> {
    let mut exprs = vec![parse_expr(parser)?];

    while parser.eat(TokenKind::Comma)? {
        exprs.push(parse_expr(parser)?);
    }

    Ok(exprs)
}

/// `func [modifiers] (name: Type, ...) [returns] { body }`
pub fn parse_function_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let start = parser.expect(TokenKind::Func)?.span.start;
    let modifiers = parse_function_modifiers(parser)?;

    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];
    if parser.current_token_kind()? != TokenKind::CloseParen {
        args.push(parse_function_arg(parser)?);

        while parser.eat(TokenKind::Comma)? {
            args.push(parse_function_arg(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_types = if parser.eat(TokenKind::OpenParen)? {
        let types = parse_type_array(parser, TokenKind::CloseParen)?;
        parser.expect(TokenKind::CloseParen)?;
        types
    } else if parser.current_token_kind()? == TokenKind::OpenCurly {
        vec![]
    } else {
        vec![parse_type(parser, false, false)?]
    };

    let block = parse_block(parser)?;

    Ok(Expression::Function(FunctionExpression {
        modifiers,
        args,
        return_types,
        block,
        span: parser.span_from(start),
    }))
}

fn parse_function_arg(parser: &mut Parser) -> Result<Argument, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser, false, false)?;

    Ok(Argument { identifier, ty })
}

/// An identifier on its own, or a call when directly followed by `(`.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let name = parser.expect(TokenKind::Identifier)?;

    if parser.current_token_kind()? == TokenKind::OpenParen {
        return parse_call_expr(parser, name);
    }

    Ok(Expression::Literal(BasicLit {
        ty: LiteralType::U8,
        value: name,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, name: Token) -> Result<Expression, Error> {
    let start = name.span.start.clone();
    parser.expect(TokenKind::OpenParen)?;

    let args = if parser.current_token_kind()? == TokenKind::CloseParen {
        vec![]
    } else {
        parse_expr_array(parser)?
    };

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expression::Call(FunctionCall {
        name,
        args,
        span: parser.span_from(start),
    }))
}

pub fn parse_basic_lit(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::Literal(BasicLit {
        ty: LiteralType::U8,
        value: parser.advance()?,
    }))
}
