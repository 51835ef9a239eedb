//! Native functions available to every program unless disabled.

use star_ir::StringInterner;
use star_patterns::errors::{wrong_arg_count, wrong_arg_type};
use star_patterns::{EvalError, EvalResult, Value};

use crate::{Environment, SharedPrintHandler};

/// Define the prelude natives as immutable globals.
pub fn register_prelude(
    env: &mut Environment,
    interner: &StringInterner,
    print_handler: &SharedPrintHandler,
) {
    let mut define = |name: &str, value: Value| env.define_global(interner.intern(name), value);

    let handler = SharedPrintHandler::clone(print_handler);
    define(
        "print",
        Value::native("print", move |args| {
            handler.print_values(args);
            Ok(Value::Undefined)
        }),
    );
    define("typeOf", Value::native("typeOf", type_of));
    define("len", Value::native("len", len));
    define("gcd", Value::native("gcd", gcd));
    define("isCoPrimeTo", Value::native("isCoPrimeTo", is_coprime_to));
    define("tag", Value::native("tag", tag));
    define("tagOf", Value::native("tagOf", tag_of));
    define("instanceOf", Value::native("instanceOf", instance_of));
    define("hasCallable", Value::native("hasCallable", has_callable));
}

fn expect_args<'v, const N: usize>(
    name: &str,
    args: &'v [Value],
) -> Result<&'v [Value; N], EvalError> {
    <&[Value; N]>::try_from(args).map_err(|_| wrong_arg_count(name, N, args.len()))
}

fn type_of(args: &[Value]) -> EvalResult {
    let [value] = expect_args::<1>("typeOf", args)?;
    Ok(Value::string(value.type_of()))
}

#[expect(clippy::cast_precision_loss, reason = "lengths stay far below 2^53")]
fn len(args: &[Value]) -> EvalResult {
    let [value] = expect_args::<1>("len", args)?;
    let len = match value {
        Value::Str(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(object) => object.len(),
        _ => return Err(wrong_arg_type("len", "a string, array or object")),
    };
    Ok(Value::Number(len as f64))
}

/// Greatest common divisor of two integers.
fn gcd_of(name: &str, args: &[Value]) -> Result<f64, EvalError> {
    let [a, b] = expect_args::<2>(name, args)?;
    let (Some(mut a), Some(mut b)) = (a.as_number(), b.as_number()) else {
        return Err(wrong_arg_type(name, "two numbers"));
    };
    if a.fract() != 0.0 || b.fract() != 0.0 {
        return Err(wrong_arg_type(name, "two integers"));
    }
    (a, b) = (a.abs(), b.abs());
    while b != 0.0 {
        (a, b) = (b, a % b);
    }
    Ok(a)
}

fn gcd(args: &[Value]) -> EvalResult {
    gcd_of("gcd", args).map(Value::Number)
}

/// `isCoPrimeTo(a, b)`: usable directly as a `switch*` comparator.
fn is_coprime_to(args: &[Value]) -> EvalResult {
    #[expect(clippy::float_cmp, reason = "gcd of integers is an exact integer")]
    let coprime = gcd_of("isCoPrimeTo", args)? == 1.0;
    Ok(Value::Bool(coprime))
}

/// `tag(name, object)`: a copy of `object` carrying the type tag `name`.
fn tag(args: &[Value]) -> EvalResult {
    let [name, object] = expect_args::<2>("tag", args)?;
    match (name, object) {
        (Value::Str(name), Value::Object(object)) => {
            Ok(Value::object((**object).clone().with_tag(&**name)))
        }
        _ => Err(wrong_arg_type("tag", "a tag name and an object")),
    }
}

fn tag_of(args: &[Value]) -> EvalResult {
    let [value] = expect_args::<1>("tagOf", args)?;
    Ok(value.tag().map_or(Value::Undefined, Value::string))
}

/// `instanceOf(tagName, value)`. Argument order matches the comparator
/// calling convention `(candidate, subject)`.
fn instance_of(args: &[Value]) -> EvalResult {
    let [tag_name, value] = expect_args::<2>("instanceOf", args)?;
    let Some(tag_name) = tag_name.as_str() else {
        return Err(wrong_arg_type("instanceOf", "a tag name"));
    };
    Ok(Value::Bool(value.tag() == Some(tag_name)))
}

/// `hasCallable(name)`: a predicate testing for a callable property.
fn has_callable(args: &[Value]) -> EvalResult {
    let [name] = expect_args::<1>("hasCallable", args)?;
    let Some(name) = name.as_str().map(str::to_owned) else {
        return Err(wrong_arg_type("hasCallable", "a property name"));
    };
    let label = format!("hasCallable({name:?})");
    Ok(Value::native(&label, move |args| {
        let [value] = expect_args::<1>("hasCallable predicate", args)?;
        let callable = !value.is_nullish()
            && value
                .property(&name)
                .is_some_and(|property| property.is_callable());
        Ok(Value::Bool(callable))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer_handler;
    use pretty_assertions::assert_eq;
    use star_diagnostic::ErrorCode;

    fn prelude() -> (Environment, StringInterner, SharedPrintHandler) {
        let interner = StringInterner::new();
        let mut env = Environment::new();
        let handler = buffer_handler();
        register_prelude(&mut env, &interner, &handler);
        (env, interner, handler)
    }

    fn call(name: &str, args: &[Value]) -> EvalResult {
        let (env, interner, _) = prelude();
        match env.lookup(interner.intern(name)) {
            Some(Value::Function(f)) => f.call(args),
            other => panic!("{name} is not a prelude function: {other:?}"),
        }
    }

    #[test]
    fn print_joins_arguments() {
        let (env, interner, handler) = prelude();
        let Some(Value::Function(print)) = env.lookup(interner.intern("print")) else {
            panic!("print missing");
        };
        let result = print.call(&[Value::string("x ="), Value::Number(1.0)]);
        assert_eq!(result, Ok(Value::Undefined));
        assert_eq!(handler.get_output(), "x = 1\n");
    }

    #[test]
    fn gcd_and_coprime() {
        let args = [Value::Number(14.0), Value::Number(-21.0)];
        assert_eq!(call("gcd", &args), Ok(Value::Number(7.0)));
        assert_eq!(call("isCoPrimeTo", &args), Ok(Value::Bool(false)));
        assert_eq!(
            call("isCoPrimeTo", &[Value::Number(15.0), Value::Number(14.0)]),
            Ok(Value::Bool(true))
        );
        let error = call("gcd", &[Value::Number(1.5), Value::Number(2.0)]).err();
        assert_eq!(error.map(|e| e.code()), Some(ErrorCode::E6004));
    }

    #[test]
    fn arity_is_checked() {
        let error = call("len", &[]).err();
        assert_eq!(
            error.map(|e| e.message),
            Some("`len` expects 1 argument(s), got 0".to_owned())
        );
    }

    #[test]
    fn tags() {
        let duck = call(
            "tag",
            &[
                Value::string("Duck"),
                Value::object_from([("name", Value::string("d"))]),
            ],
        );
        let Ok(duck) = duck else {
            panic!("tag failed");
        };
        assert_eq!(call("tagOf", &[duck.clone()]), Ok(Value::string("Duck")));
        assert_eq!(
            call("instanceOf", &[Value::string("Duck"), duck.clone()]),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            call("instanceOf", &[Value::string("Goose"), duck]),
            Ok(Value::Bool(false))
        );
        assert_eq!(call("tagOf", &[Value::Null]), Ok(Value::Undefined));
    }

    #[test]
    fn has_callable_builds_a_predicate() {
        let Ok(Value::Function(predicate)) = call("hasCallable", &[Value::string("quack")]) else {
            panic!("hasCallable should return a function");
        };
        let duck =
            Value::object_from([("quack", Value::native("quack", |_| Ok(Value::Undefined)))]);
        let robot = Value::object_from([("quack", Value::string("beep"))]);
        assert_eq!(predicate.call(&[duck]), Ok(Value::Bool(true)));
        assert_eq!(predicate.call(&[robot]), Ok(Value::Bool(false)));
        assert_eq!(predicate.call(&[Value::Null]), Ok(Value::Bool(false)));
    }

    #[test]
    fn len_of_values() {
        assert_eq!(call("len", &[Value::string("héllo")]), Ok(Value::Number(5.0)));
        assert_eq!(
            call("len", &[Value::array(vec![Value::Null, Value::Null])]),
            Ok(Value::Number(2.0))
        );
        assert_eq!(call("typeOf", &[Value::array(Vec::new())]), Ok(Value::string("object")));
    }
}
