//! Type parsing.
//!
//! Handles everything that can appear in a type position:
//!
//! - Named types (identifiers)
//! - Pointer markers (`*`) in front of any type
//! - Function types with their modifiers
//! - Inline struct and tuple definitions, where the caller allows them
//!
//! Enum definitions are only valid as top-level type definitions and are
//! parsed by [`parse_enum_type`].

use crate::{
    ast::{
        ast::Expression,
        types::{
            Enum, FunctionModifier, FunctionTypeStruct, Struct, StructProp, Tuple, TypeKind,
            TypeStruct,
        },
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

/// Parses one type.
///
/// `allow_inline_defs` permits `struct`/`tuple` definitions in this
/// position; `allow_unnamed` lets those definitions omit their name.
pub fn parse_type(
    parser: &mut Parser,
    allow_inline_defs: bool,
    allow_unnamed: bool,
) -> Result<TypeStruct, Error> {
    let start = parser.get_position()?;

    let mut pointer_index = 0;
    while parser.current_token()?.is_pointer_marker() {
        parser.advance()?;
        pointer_index += 1;
    }

    let kind = match parser.current_token_kind()? {
        TokenKind::Struct | TokenKind::Tuple if !allow_inline_defs => {
            return Err(parser.unexpected("a type allowed here")?)
        }
        TokenKind::Struct => TypeKind::Struct(parse_struct_type(parser, allow_unnamed)?),
        TokenKind::Tuple => TypeKind::Tuple(parse_tuple_type(parser, allow_unnamed)?),
        TokenKind::Func => TypeKind::Function(parse_function_type(parser)?),
        TokenKind::Identifier => TypeKind::Identifier(parser.advance()?),
        _ => return Err(parser.unexpected("a type")?),
    };

    Ok(TypeStruct {
        pointer_index,
        kind,
        span: parser.span_from(start),
    })
}

/// One or more comma separated types.
pub fn parse_type_list(parser: &mut Parser) -> Result<Vec<TypeStruct>, Error> {
    let mut types = vec![parse_type(parser, false, false)?];

    while parser.eat(TokenKind::Comma)? {
        types.push(parse_type(parser, false, false)?);
    }

    Ok(types)
}

/// Comma separated types up to (not including) `closing`. May be empty.
pub fn parse_type_array(parser: &mut Parser, closing: TokenKind) -> Result<Vec<TypeStruct>, Error> {
    if parser.current_token_kind()? == closing {
        return Ok(vec![]);
    }

    parse_type_list(parser)
}

/// `[inline] [async|work] [inline]`
pub fn parse_function_modifiers(parser: &mut Parser) -> Result<FunctionModifier, Error> {
    let mut modifiers = FunctionModifier::empty();

    if parser.eat(TokenKind::Inline)? {
        modifiers |= FunctionModifier::INLINE;
    }

    modifiers |= match parser.current_token_kind()? {
        TokenKind::Async => {
            parser.advance()?;
            FunctionModifier::ASYNC
        }
        TokenKind::Work => {
            parser.advance()?;
            FunctionModifier::WORK
        }
        _ => FunctionModifier::ORDINARY,
    };

    if !modifiers.is_inline() && parser.eat(TokenKind::Inline)? {
        modifiers |= FunctionModifier::INLINE;
    }

    Ok(modifiers)
}

/// Tokens that end a function type without a bare return type.
fn ends_function_type(parser: &mut Parser) -> Result<bool, Error> {
    let token = parser.current_token()?;

    Ok(token.is_plain_assign()
        || token.is_one_of_many(&[
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::CloseParen,
            TokenKind::CloseCurly,
        ]))
}

/// `func [modifiers] (types) [returns]`
pub fn parse_function_type(parser: &mut Parser) -> Result<FunctionTypeStruct, Error> {
    parser.expect(TokenKind::Func)?;
    let modifiers = parse_function_modifiers(parser)?;

    parser.expect(TokenKind::OpenParen)?;
    let args = parse_type_array(parser, TokenKind::CloseParen)?;
    parser.expect(TokenKind::CloseParen)?;

    let return_types = if parser.eat(TokenKind::OpenParen)? {
        let types = parse_type_array(parser, TokenKind::CloseParen)?;
        parser.expect(TokenKind::CloseParen)?;
        types
    } else if ends_function_type(parser)? {
        vec![]
    } else {
        vec![parse_type(parser, false, false)?]
    };

    Ok(FunctionTypeStruct {
        modifiers,
        args,
        return_types,
    })
}

/// The name of a struct or tuple definition.
fn parse_definition_name(
    parser: &mut Parser,
    allow_unnamed: bool,
) -> Result<Option<Token>, Error> {
    if parser.current_token_kind()? == TokenKind::Identifier {
        return Ok(Some(parser.advance()?));
    }

    if !allow_unnamed {
        return Err(parser.unexpected(TokenKind::Identifier.to_string())?);
    }

    Ok(None)
}

/// `struct [Name] { prop; prop; ... }`
pub fn parse_struct_type(parser: &mut Parser, allow_unnamed: bool) -> Result<Struct, Error> {
    let start = parser.expect(TokenKind::Struct)?.span.start;
    let name = parse_definition_name(parser, allow_unnamed)?;

    parser.expect(TokenKind::OpenCurly)?;

    let mut props = vec![];
    while parser.current_token_kind()? != TokenKind::CloseCurly {
        props.push(parse_struct_prop(parser)?);

        if !parser.eat(TokenKind::Semicolon)? {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Struct {
        name,
        props,
        span: parser.span_from(start),
    })
}

/// `tuple [Name] { type, type, ... }`
pub fn parse_tuple_type(parser: &mut Parser, allow_unnamed: bool) -> Result<Tuple, Error> {
    let start = parser.expect(TokenKind::Tuple)?.span.start;
    let name = parse_definition_name(parser, allow_unnamed)?;

    parser.expect(TokenKind::OpenCurly)?;
    let types = parse_type_array(parser, TokenKind::CloseCurly)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Tuple {
        name,
        types,
        span: parser.span_from(start),
    })
}

/// `..Embedded` or `name Type [= default]`
pub fn parse_struct_prop(parser: &mut Parser) -> Result<StructProp, Error> {
    match parser.current_token_kind()? {
        TokenKind::DotDot => {
            parser.advance()?;
            Ok(StructProp::Embed(parser.expect(TokenKind::Identifier)?))
        }
        TokenKind::Identifier => {
            let identifier = parser.advance()?;
            let ty = parse_type(parser, true, true)?;

            // Inline definitions cannot carry a default value
            let default = if !ty.is_inline_definition() && parser.current_token()?.is_plain_assign()
            {
                parser.advance()?;
                Some(parse_expr(parser)?)
            } else {
                None
            };

            Ok(StructProp::Field {
                identifier,
                ty,
                default,
            })
        }
        _ => Err(parser.unexpected("Identifier or DotDot")?),
    }
}

/// `enum Name { A, B = expr, ... }`
///
/// A comma before the first entry is accepted but not required. A trailing
/// comma is tolerated.
pub fn parse_enum_type(parser: &mut Parser) -> Result<Enum, Error> {
    let start = parser.expect(TokenKind::Enum)?.span.start;
    let name = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenCurly)?;
    parser.eat(TokenKind::Comma)?;

    let mut identifiers = vec![];
    let mut values: Vec<Option<Expression>> = vec![];

    while parser.current_token_kind()? != TokenKind::CloseCurly {
        identifiers.push(parser.expect(TokenKind::Identifier)?);

        if parser.current_token()?.is_plain_assign() {
            parser.advance()?;
            values.push(Some(parse_expr(parser)?));
        } else {
            values.push(None);
        }

        if !parser.eat(TokenKind::Comma)? {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Enum {
        name,
        identifiers,
        values,
        span: parser.span_from(start),
    })
}
