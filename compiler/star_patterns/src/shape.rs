//! Destructuring shapes.
//!
//! A shape is the compiled form of a destructuring target. Leaves are
//! identifiers; property keys are resolved to strings at compile time so
//! the matcher never needs the interner.

use star_ir::{ExprId, Name, Span};

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Always matches and binds the whole value.
    Identifier { name: Name, span: Span },
    Array(ArrayShape),
    Object(ObjectShape),
}

/// A target plus the default used when the value is absent or `undefined`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeElement {
    pub target: Shape,
    pub default: Option<ExprId>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrayShapeElement {
    /// Required position whose value is ignored.
    Hole(Span),
    Element(ShapeElement),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RestBinding {
    pub name: Name,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayShape {
    pub elements: Vec<ArrayShapeElement>,
    pub rest: Option<RestBinding>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyShape {
    pub key: String,
    pub key_span: Span,
    pub element: ShapeElement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectShape {
    pub properties: Vec<PropertyShape>,
    pub rest: Option<RestBinding>,
    pub span: Span,
}

impl Shape {
    pub fn span(&self) -> Span {
        match self {
            Shape::Identifier { span, .. } => *span,
            Shape::Array(array) => array.span,
            Shape::Object(object) => object.span,
        }
    }

    /// Every name this shape binds, in source order, with its span.
    /// Duplicates are kept so callers can report them.
    pub fn binding_names(&self) -> Vec<(Name, Span)> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, out: &mut Vec<(Name, Span)>) {
        match self {
            Shape::Identifier { name, span } => out.push((*name, *span)),
            Shape::Array(array) => {
                for element in &array.elements {
                    if let ArrayShapeElement::Element(element) = element {
                        element.target.collect_names(out);
                    }
                }
                if let Some(rest) = &array.rest {
                    out.push((rest.name, rest.span));
                }
            }
            Shape::Object(object) => {
                for property in &object.properties {
                    property.element.target.collect_names(out);
                }
                if let Some(rest) = &object.rest {
                    out.push((rest.name, rest.span));
                }
            }
        }
    }

    /// True if the shape succeeds on every value it does not reject with a
    /// runtime error.
    pub fn is_irrefutable(&self) -> bool {
        match self {
            Shape::Identifier { .. } => true,
            Shape::Array(array) => array.elements.iter().all(|element| match element {
                ArrayShapeElement::Hole(_) => false,
                ArrayShapeElement::Element(e) => e.default.is_some() && e.target.is_irrefutable(),
            }),
            Shape::Object(object) => object
                .properties
                .iter()
                .all(|p| p.element.default.is_some() && p.element.target.is_irrefutable()),
        }
    }

    /// Conservative coverage check: true only if every value `later`
    /// matches is also matched (or rejected with an error) by `self`.
    /// Binding names are ignored.
    pub fn covers(&self, later: &Shape) -> bool {
        match (self, later) {
            (Shape::Identifier { .. }, _) => true,
            (Shape::Array(earlier), Shape::Array(later)) => earlier.covers(later),
            (Shape::Object(earlier), Shape::Object(later)) => earlier.covers(later),
            _ => false,
        }
    }
}

impl ShapeElement {
    /// Coverage of one position or property that `later` also declares.
    fn covers(&self, later: &ShapeElement) -> bool {
        match (self.default, later.default) {
            (None, None) => self.target.covers(&later.target),
            // The earlier side may substitute its default where the later
            // side matches `undefined` as is.
            (Some(_), _) => self.target.is_irrefutable(),
            (None, Some(_)) => false,
        }
    }

    /// Coverage of a position or property that `later` does not declare.
    fn covers_anything(&self) -> bool {
        self.default.is_some() && self.target.is_irrefutable()
    }
}

impl ArrayShape {
    fn covers(&self, later: &ArrayShape) -> bool {
        self.elements
            .iter()
            .enumerate()
            .all(|(i, earlier)| match (earlier, later.elements.get(i)) {
                (ArrayShapeElement::Hole(_), Some(ArrayShapeElement::Hole(_))) => true,
                (ArrayShapeElement::Hole(_), Some(ArrayShapeElement::Element(l))) => {
                    l.default.is_none()
                }
                (ArrayShapeElement::Element(e), Some(ArrayShapeElement::Hole(_))) => {
                    e.target.is_irrefutable()
                }
                (ArrayShapeElement::Element(e), Some(ArrayShapeElement::Element(l))) => e.covers(l),
                (ArrayShapeElement::Hole(_), None) => false,
                (ArrayShapeElement::Element(e), None) => e.covers_anything(),
            })
    }
}

impl ObjectShape {
    fn covers(&self, later: &ObjectShape) -> bool {
        self.properties.iter().all(|earlier| {
            match later.properties.iter().find(|l| l.key == earlier.key) {
                Some(l) => earlier.element.covers(&l.element),
                None => earlier.element.covers_anything(),
            }
        })
    }
}
