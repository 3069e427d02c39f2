//! Factory for [`GridLines`] layers.
//!
//! # Arguments
//!
//! | Name | Position | Value | Default |
//! |------|----------|-------|---------|
//! | `gravity` | 0 | `top`, `bottom`, `left` or `right` | required (`top` for baseline grids) |
//! | `step` | 1 | positive integer | required |
//! | `thickness` | | non-negative integer | `1` |
//! | `limit` | | integer, zero or less for no limit | no limit |
//! | `offset` | | integer | `0` |
//! | `color` | | CSS color string or `0xAARRGGBB` integer | grid or baseline color |
//! | `style` | | `fill` or `stroke` | `fill` |
//! | `margin` | | margin applied to all sides | `0` |
//! | `margin-left`, `margin-top`, `margin-right`, `margin-bottom` | | margin for one side | `margin` |
//!
//! Margins are integers (pixels) or strings such as `"12px"` or `"25%"`. All
//! non-zero margins of one layer must use the same unit.

use std::{str::FromStr, sync::Arc};

use rhythm_core::{
    color::Color,
    draw::PaintStyle,
    geometry::{MarginUnit, Margins},
    spec::{Gravity, GridLines},
};

use crate::{
    layer_config::{ArgValue, ArgumentError, LayerConfig},
    registry::{LayerCache, SpecLayerFactory},
};

const ARGUMENTS: &[&str] = &[
    "gravity",
    "step",
    "thickness",
    "limit",
    "offset",
    "color",
    "style",
    "margin",
    "margin-left",
    "margin-top",
    "margin-right",
    "margin-bottom",
];

const SIDES: [&str; 4] = ["margin-left", "margin-top", "margin-right", "margin-bottom"];

/// Creates [`GridLines`] from layer configs, caching one instance per
/// distinct config.
#[derive(Debug)]
pub struct GridLinesFactory {
    default_gravity: Option<Gravity>,
    default_color: Color,
    cache: LayerCache<GridLines>,
}

impl GridLinesFactory {
    /// A factory for regular grids: gravity is required and lines default to
    /// [`GridLines::DEFAULT_GRID_COLOR`].
    pub fn new() -> Self {
        Self {
            default_gravity: None,
            default_color: Color::from_argb(GridLines::DEFAULT_GRID_COLOR),
            cache: LayerCache::new(),
        }
    }

    /// A factory for baseline grids: gravity defaults to top and lines default
    /// to [`GridLines::DEFAULT_BASELINE_COLOR`].
    pub fn baseline() -> Self {
        Self {
            default_gravity: Some(Gravity::Top),
            default_color: Color::from_argb(GridLines::DEFAULT_BASELINE_COLOR),
            cache: LayerCache::new(),
        }
    }

    /// Returns the number of distinct layers created so far
    pub fn cached_layers(&self) -> usize {
        self.cache.len()
    }

    fn build_layer(&self, config: &LayerConfig) -> Result<GridLines, ArgumentError> {
        config.ensure_known(ARGUMENTS, 2)?;

        let gravity = match config.named_or_positional("gravity", 0) {
            Some(value) => parse_gravity(value)?,
            None => self.default_gravity.ok_or_else(|| ArgumentError::Missing {
                name: "gravity".to_string(),
            })?,
        };

        let step = match config.named_or_positional("step", 1) {
            Some(value) => to_i32("step", value)?,
            None => {
                return Err(ArgumentError::Missing {
                    name: "step".to_string(),
                });
            }
        };
        if step <= 0 {
            return Err(ArgumentError::invalid(
                "step",
                format!("must be positive, got {step}"),
            ));
        }

        let mut builder = GridLines::builder(gravity, step).color(self.default_color);

        if let Some(value) = config.get("thickness") {
            let thickness = to_i32("thickness", value)?;
            let thickness = u32::try_from(thickness).map_err(|_| {
                ArgumentError::invalid(
                    "thickness",
                    format!("must not be negative, got {thickness}"),
                )
            })?;
            builder = builder.thickness(thickness);
        }
        if let Some(value) = config.get("limit") {
            builder = builder.limit(to_i32("limit", value)?);
        }
        if let Some(value) = config.get("offset") {
            builder = builder.offset(to_i32("offset", value)?);
        }
        if let Some(value) = config.get("color") {
            builder = builder.color(parse_color(value)?);
        }
        if let Some(style) = config.string("style")? {
            let style = PaintStyle::from_str(style)
                .map_err(|err| ArgumentError::invalid("style", err))?;
            builder = builder.paint_style(style);
        }

        Ok(builder.margins(parse_margins(config)?).build())
    }
}

impl Default for GridLinesFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecLayerFactory for GridLinesFactory {
    type Layer = GridLines;

    fn get_for_config(&self, config: &LayerConfig) -> Result<Arc<GridLines>, ArgumentError> {
        self.cache
            .get_or_try_insert_with(config, || self.build_layer(config))
    }
}

fn to_i32(name: &str, value: &ArgValue) -> Result<i32, ArgumentError> {
    match value {
        ArgValue::Int(int) => i32::try_from(*int)
            .map_err(|_| ArgumentError::invalid(name, format!("{int} is out of range"))),
        other => Err(ArgumentError::wrong_type(name, "an integer", other)),
    }
}

fn parse_gravity(value: &ArgValue) -> Result<Gravity, ArgumentError> {
    match value {
        ArgValue::Str(name) => {
            Gravity::from_str(name).map_err(|err| ArgumentError::invalid("gravity", err))
        }
        other => Err(ArgumentError::wrong_type("gravity", "a string", other)),
    }
}

fn parse_color(value: &ArgValue) -> Result<Color, ArgumentError> {
    match value {
        ArgValue::Str(css) => Color::new(css).map_err(|err| ArgumentError::invalid("color", err)),
        ArgValue::Int(argb) => u32::try_from(*argb).map(Color::from_argb).map_err(|_| {
            ArgumentError::invalid("color", format!("{argb} is not a 0xAARRGGBB value"))
        }),
        other => Err(ArgumentError::wrong_type(
            "color",
            "a color string or integer",
            other,
        )),
    }
}

/// A single margin value. Zero carries no unit so it mixes with anything.
#[derive(Debug, Clone, Copy, Default)]
struct MarginValue {
    value: i32,
    unit: Option<MarginUnit>,
}

fn parse_margin(name: &str, value: &ArgValue) -> Result<MarginValue, ArgumentError> {
    let (value, unit) = match value {
        ArgValue::Int(_) => (to_i32(name, value)?, MarginUnit::Pixels),
        ArgValue::Str(text) => {
            let text = text.trim();
            let (number, unit) = if let Some(number) = text.strip_suffix('%') {
                (number, MarginUnit::Percent)
            } else {
                (text.strip_suffix("px").unwrap_or(text), MarginUnit::Pixels)
            };
            let value = number.trim().parse::<i32>().map_err(|_| {
                ArgumentError::invalid(name, format!("`{text}` is not a pixel or percent value"))
            })?;
            (value, unit)
        }
        other => {
            return Err(ArgumentError::wrong_type(
                name,
                "an integer or a string",
                other,
            ));
        }
    };

    Ok(MarginValue {
        value,
        unit: (value != 0).then_some(unit),
    })
}

fn parse_margins(config: &LayerConfig) -> Result<Margins, ArgumentError> {
    let uniform = config
        .get("margin")
        .map(|value| parse_margin("margin", value))
        .transpose()?
        .unwrap_or_default();

    let mut sides = [uniform; 4];
    for (side, name) in sides.iter_mut().zip(SIDES) {
        if let Some(value) = config.get(name) {
            *side = parse_margin(name, value)?;
        }
    }

    let mut unit = None;
    for side_unit in sides.iter().filter_map(|side| side.unit) {
        match unit {
            None => unit = Some(side_unit),
            Some(existing) if existing != side_unit => {
                return Err(ArgumentError::invalid(
                    "margin",
                    "pixel and percent margins cannot be mixed in one layer",
                ));
            }
            Some(_) => {}
        }
    }

    let [left, top, right, bottom] = sides.map(|side| side.value);
    Ok(Margins::new(
        unit.unwrap_or_default(),
        left,
        top,
        right,
        bottom,
    ))
}

#[cfg(test)]
mod tests {
    use rhythm_core::{draw::RecordingCanvas, geometry::Rect, spec::SpecLayer};

    use super::*;

    fn grid(args: &[(&str, ArgValue)]) -> LayerConfig {
        args.iter()
            .fold(LayerConfig::builder("grid-lines"), |builder, (name, value)| {
                builder.arg(*name, value.clone())
            })
            .build()
    }

    fn top8() -> Vec<(&'static str, ArgValue)> {
        vec![("gravity", "top".into()), ("step", 8.into())]
    }

    #[test]
    fn test_minimal_config() {
        let factory = GridLinesFactory::new();
        let layer = factory.get_for_config(&grid(&top8())).unwrap();

        assert_eq!(layer.gravity(), Gravity::Top);
        assert_eq!(layer.step(), 8);
        assert_eq!(layer.thickness(), 1);
        assert_eq!(layer.limit(), None);
        assert_eq!(layer.margins(), Margins::none());
        assert_eq!(
            layer.paint().color(),
            Color::from_argb(GridLines::DEFAULT_GRID_COLOR)
        );
    }

    #[test]
    fn test_positional_gravity_and_step() {
        let config = LayerConfig::builder("grid-lines")
            .positional("right")
            .positional(10)
            .arg("thickness", 2)
            .arg("offset", -1)
            .build();
        let layer = GridLinesFactory::new().get_for_config(&config).unwrap();

        let mut canvas = RecordingCanvas::new();
        layer.draw(&mut canvas, Rect::from_size(100, 34));
        assert_eq!(canvas.len(), 10);
        assert_eq!(canvas.rects()[0], Rect::new(99, 0, 101, 34));
    }

    #[test]
    fn test_all_arguments() {
        let mut args = top8();
        args.extend([
            ("thickness", 3.into()),
            ("limit", 4.into()),
            ("offset", (-2).into()),
            ("color", "#0000ff".into()),
            ("style", "stroke".into()),
            ("margin", "10%".into()),
            ("margin-top", 0.into()),
        ]);
        let layer = GridLinesFactory::new().get_for_config(&grid(&args)).unwrap();

        assert_eq!(layer.thickness(), 3);
        assert_eq!(layer.limit(), Some(4));
        assert_eq!(layer.offset(), -2);
        assert_eq!(layer.paint().color(), Color::new("#0000ff").unwrap());
        assert_eq!(layer.paint().style(), PaintStyle::Stroke);
        assert_eq!(layer.margins(), Margins::percent(10, 0, 10, 10));
    }

    #[test]
    fn test_integer_color_is_argb() {
        let mut args = top8();
        args.push(("color", ArgValue::Int(0x800091EA)));
        let layer = GridLinesFactory::new().get_for_config(&grid(&args)).unwrap();
        assert_eq!(
            layer.paint().color(),
            Color::from_argb(GridLines::DEFAULT_BASELINE_COLOR)
        );
    }

    #[test]
    fn test_pixel_margin_forms() {
        let mut args = top8();
        args.extend([
            ("margin-left", 4.into()),
            ("margin-right", "12px".into()),
            ("margin-bottom", " 7 ".into()),
        ]);
        let layer = GridLinesFactory::new().get_for_config(&grid(&args)).unwrap();
        assert_eq!(layer.margins(), Margins::pixels(4, 0, 12, 7));
    }

    #[test]
    fn test_non_positive_limit_means_unlimited() {
        let mut args = top8();
        args.push(("limit", 0.into()));
        let layer = GridLinesFactory::new().get_for_config(&grid(&args)).unwrap();
        assert_eq!(layer.limit(), None);
    }

    #[test]
    fn test_baseline_defaults() {
        let config = LayerConfig::builder("baseline-grid").arg("step", 4).build();
        let layer = GridLinesFactory::baseline().get_for_config(&config).unwrap();
        assert_eq!(layer.gravity(), Gravity::Top);
        assert_eq!(
            layer.paint().color(),
            Color::from_argb(GridLines::DEFAULT_BASELINE_COLOR)
        );
    }

    #[test]
    fn test_missing_arguments() {
        let factory = GridLinesFactory::new();

        let err = factory
            .get_for_config(&grid(&[("step", 8.into())]))
            .unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Missing {
                name: "gravity".to_string()
            }
        );

        let err = factory
            .get_for_config(&grid(&[("gravity", "top".into())]))
            .unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Missing {
                name: "step".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let factory = GridLinesFactory::new();
        let cases: Vec<(&str, ArgValue)> = vec![
            ("step", 0.into()),
            ("step", "eight".into()),
            ("step", ArgValue::Int(i64::MAX)),
            ("gravity", "middle".into()),
            ("gravity", true.into()),
            ("thickness", (-1).into()),
            ("color", "not-a-color".into()),
            ("color", ArgValue::Int(-1)),
            ("style", "hatched".into()),
            ("margin", "5em".into()),
            ("margin-left", false.into()),
            ("colour", "red".into()),
        ];

        for (name, value) in cases {
            let mut args = top8();
            args.retain(|(existing, _)| *existing != name);
            args.push((name, value.clone()));
            assert!(
                factory.get_for_config(&grid(&args)).is_err(),
                "`{name} = {value}` should be rejected"
            );
        }
        assert_eq!(factory.cached_layers(), 0);
    }

    #[test]
    fn test_mixed_margin_units_are_rejected() {
        let mut args = top8();
        args.extend([("margin-left", "10%".into()), ("margin-right", 8.into())]);
        let err = GridLinesFactory::new()
            .get_for_config(&grid(&args))
            .unwrap_err();
        assert!(err.to_string().contains("cannot be mixed"));
    }

    #[test]
    fn test_too_many_positional_arguments() {
        let config = LayerConfig::builder("grid-lines")
            .positional("top")
            .positional(8)
            .positional(1)
            .build();
        let err = GridLinesFactory::new().get_for_config(&config).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Unexpected {
                name: "#3".to_string()
            }
        );
    }

    #[test]
    fn test_equal_configs_reuse_instance() {
        let factory = GridLinesFactory::new();
        let a = factory.get_for_config(&grid(&top8())).unwrap();
        let b = factory.get_for_config(&grid(&top8())).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(factory.cached_layers(), 1);
    }

    #[test]
    fn test_different_configs_produce_different_layers() {
        let factory = GridLinesFactory::new();
        let a = factory.get_for_config(&grid(&top8())).unwrap();

        let mut args = top8();
        args.push(("thickness", 2.into()));
        let b = factory.get_for_config(&grid(&args)).unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.thickness(), 1);
        assert_eq!(b.thickness(), 2);
        assert_eq!(factory.cached_layers(), 2);
    }
}
