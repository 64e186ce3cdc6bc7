use std::cell::Cell;

use anyhow::{bail, Result};
use image::{Rgba, RgbaImage};
use screen_pen::draw::capture::{capture_display, CaptureBackend, DisplayCapture, DisplayGeometry};

enum Outcome {
    Fail,
    Displays(Vec<[u8; 4]>),
}

struct FakeBackend {
    name: &'static str,
    outcome: Outcome,
    calls: Cell<u32>,
}

impl FakeBackend {
    fn boxed(name: &'static str, outcome: Outcome) -> Box<dyn CaptureBackend> {
        Box::new(Self {
            name,
            outcome,
            calls: Cell::new(0),
        })
    }
}

impl CaptureBackend for FakeBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn capture_all(&self) -> Result<Vec<DisplayCapture>> {
        self.calls.set(self.calls.get() + 1);
        match &self.outcome {
            Outcome::Fail => bail!("{} is not available", self.name),
            Outcome::Displays(fills) => Ok(fills
                .iter()
                .enumerate()
                .map(|(i, fill)| DisplayCapture {
                    geometry: DisplayGeometry {
                        x: i as i32 * 8,
                        y: 0,
                        width: 8,
                        height: 6,
                    },
                    image: RgbaImage::from_pixel(8, 6, Rgba(*fill)),
                })
                .collect()),
        }
    }
}

#[test]
fn failing_backend_falls_through_to_a_blank_capture() {
    let backends = vec![
        FakeBackend::boxed("a", Outcome::Fail),
        FakeBackend::boxed("b", Outcome::Displays(vec![[0, 0, 0, 255]])),
    ];
    let report = capture_display(&backends, 0).unwrap();

    assert_eq!(report.backend, "b");
    assert!(report.blank_suspected);
    assert_eq!(report.display.image.dimensions(), (8, 6));
}

#[test]
fn first_working_backend_wins() {
    let backends = vec![
        FakeBackend::boxed("a", Outcome::Displays(vec![[0, 0, 0, 255], [9, 9, 9, 255]])),
        FakeBackend::boxed("b", Outcome::Fail),
    ];
    let report = capture_display(&backends, 1).unwrap();

    assert_eq!(report.backend, "a");
    assert!(!report.blank_suspected);
    assert_eq!(report.display.geometry.x, 8);
    assert_eq!(report.display.image.get_pixel(0, 0), &Rgba([9, 9, 9, 255]));
}

#[test]
fn every_backend_failing_is_an_error() {
    let backends = vec![
        FakeBackend::boxed("a", Outcome::Fail),
        FakeBackend::boxed("b", Outcome::Fail),
        FakeBackend::boxed("c", Outcome::Displays(Vec::new())),
    ];
    let err = capture_display(&backends, 0).unwrap_err();
    assert!(err.to_string().contains("unable to take a screenshot"));
}

#[test]
fn missing_display_index_is_an_error() {
    let backends = vec![FakeBackend::boxed(
        "a",
        Outcome::Displays(vec![[1, 2, 3, 255], [4, 5, 6, 255]]),
    )];
    let err = capture_display(&backends, 2).unwrap_err();
    assert!(err.to_string().contains("display 2"));
}
