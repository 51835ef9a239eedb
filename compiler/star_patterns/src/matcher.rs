//! Structural matching of destructuring shapes against values.

use smallvec::SmallVec;
use star_ir::Name;
use star_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::{binding_collision, cannot_destructure};
use crate::shape::{ArrayShape, ArrayShapeElement, ObjectShape, Shape, ShapeElement};
use crate::{EvalError, ObjectValue, PatternHost, Value};

/// Names bound by one successful trial, in binding order.
pub type Bindings = SmallVec<[(Name, Value); 4]>;

/// Match `shape` against `value`.
///
/// Returns `Ok(None)` when the shape does not fit, and an error when the
/// value cannot be destructured at all (array shape against a non-iterable,
/// object shape against `null`/`undefined`) or a default fails to evaluate.
/// The value is never modified.
pub fn match_shape<H: PatternHost + ?Sized>(
    shape: &Shape,
    value: &Value,
    host: &mut H,
) -> Result<Option<Bindings>, EvalError> {
    let mut matcher = ShapeMatcher {
        host,
        bindings: Bindings::new(),
    };
    if matcher.match_shape(shape, value)? {
        Ok(Some(matcher.bindings))
    } else {
        Ok(None)
    }
}

struct ShapeMatcher<'h, H: ?Sized> {
    host: &'h mut H,
    bindings: Bindings,
}

impl<H: PatternHost + ?Sized> ShapeMatcher<'_, H> {
    fn match_shape(&mut self, shape: &Shape, value: &Value) -> Result<bool, EvalError> {
        ensure_sufficient_stack(|| match shape {
            Shape::Identifier { name, span } => {
                self.bind(*name, value.clone())
                    .map_err(|e| e.with_span(*span))?;
                Ok(true)
            }
            Shape::Array(array) => self.match_array(array, value),
            Shape::Object(object) => self.match_object(object, value),
        })
    }

    fn bind(&mut self, name: Name, value: Value) -> Result<(), EvalError> {
        // Compilation rejects duplicate names; a collision here means the
        // shape was built by hand.
        if self.bindings.iter().any(|(bound, _)| *bound == name) {
            return Err(binding_collision(self.host.interner().lookup(name)));
        }
        self.bindings.push((name, value));
        Ok(())
    }

    /// Match one element or property. `found` is `None` when the position
    /// or key is absent.
    fn match_element(
        &mut self,
        element: &ShapeElement,
        found: Option<Value>,
    ) -> Result<bool, EvalError> {
        let value = match (found, element.default) {
            (Some(Value::Undefined) | None, Some(default)) => self.host.evaluate(default)?,
            (Some(value), _) => value,
            (None, None) => return Ok(false),
        };
        self.match_shape(&element.target, &value)
    }

    fn match_array(&mut self, array: &ArrayShape, value: &Value) -> Result<bool, EvalError> {
        let Some(items) = value.iter_elements() else {
            return Err(cannot_destructure(value, "array").with_span(array.span));
        };

        for (i, element) in array.elements.iter().enumerate() {
            let matched = match element {
                ArrayShapeElement::Hole(_) => i < items.len(),
                ArrayShapeElement::Element(element) => {
                    self.match_element(element, items.get(i).cloned())?
                }
            };
            if !matched {
                trace!(position = i, len = items.len(), "array shape failed");
                return Ok(false);
            }
        }

        if let Some(rest) = &array.rest {
            let remaining = items
                .get(array.elements.len()..)
                .map_or_else(Vec::new, <[Value]>::to_vec);
            self.bind(rest.name, Value::array(remaining))
                .map_err(|e| e.with_span(rest.span))?;
        }
        Ok(true)
    }

    fn match_object(&mut self, object: &ObjectShape, value: &Value) -> Result<bool, EvalError> {
        if value.is_nullish() {
            return Err(cannot_destructure(value, "object").with_span(object.span));
        }

        for property in &object.properties {
            if !self.match_element(&property.element, value.property(&property.key))? {
                trace!(key = %property.key, "object shape failed");
                return Ok(false);
            }
        }

        if let Some(rest) = &object.rest {
            let remaining: ObjectValue = value
                .own_entries()
                .into_iter()
                .filter(|(key, _)| !object.properties.iter().any(|p| p.key == *key))
                .collect();
            self.bind(rest.name, Value::object(remaining))
                .map_err(|e| e.with_span(rest.span))?;
        }
        Ok(true)
    }
}
