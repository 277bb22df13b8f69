//! Drag-and-drop colour payload.
//!
//! Wire layout: four host-endian `u16` fields, red, green, blue and a reserved
//! zero. A channel is stored as `round(c * 65536)` clamped to `0..=65535` and read
//! back as `field / 65536`.

use thiserror::Error;

use crate::color_space::Rgb;

/// MIME type identifying a colour payload.
pub const COLOR_MIME_TYPE: &str = "application/x-color";

/// Size of an encoded payload in bytes.
pub const PAYLOAD_LEN: usize = 8;

const FIXED_POINT_SCALE: f64 = 65536.0;

/// Reasons a drop is rejected. A rejected drop never changes the current colour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    /// Payload tagged with a type other than [`COLOR_MIME_TYPE`]
    #[error("Unsupported drop type '{mime}'")]
    UnsupportedMime {
        /// The offered MIME type
        mime: String,
    },

    /// Payload is not exactly [`PAYLOAD_LEN`] bytes
    #[error("Colour payload must be {expected} bytes, got {actual}")]
    WrongSize {
        /// Required length
        expected: usize,
        /// Received length
        actual: usize,
    },
}

/// A colour in its fixed-point wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPayload {
    fields: [u16; 4],
}

impl ColorPayload {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            fields: [
                to_fixed_point(rgb.r),
                to_fixed_point(rgb.g),
                to_fixed_point(rgb.b),
                0,
            ],
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let [r, g, b, _] = self.fields;
        Rgb::new(
            f64::from(r) / FIXED_POINT_SCALE,
            f64::from(g) / FIXED_POINT_SCALE,
            f64::from(b) / FIXED_POINT_SCALE,
        )
    }

    /// Raw fields: red, green, blue, reserved.
    pub fn fields(self) -> [u16; 4] {
        self.fields
    }

    pub fn to_bytes(self) -> [u8; PAYLOAD_LEN] {
        bytemuck::cast(self.fields)
    }

    /// Parse a payload, rejecting anything that is not exactly eight bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DropError> {
        if bytes.len() != PAYLOAD_LEN {
            return Err(DropError::WrongSize {
                expected: PAYLOAD_LEN,
                actual: bytes.len(),
            });
        }
        let fields: [u16; 4] = bytemuck::pod_read_unaligned(bytes);
        Ok(Self { fields })
    }

    /// Parse a drop offered as `mime`, checking the type tag first.
    pub fn from_drop(mime: &str, bytes: &[u8]) -> Result<Self, DropError> {
        if mime != COLOR_MIME_TYPE {
            return Err(DropError::UnsupportedMime {
                mime: mime.to_string(),
            });
        }
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for ColorPayload {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

fn to_fixed_point(c: f64) -> u16 {
    // NaN saturates to 0 in the cast
    (c * FIXED_POINT_SCALE).round().clamp(0.0, 65535.0) as u16
}

/// A drag that has started: what the host should offer to drop targets.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub mime: &'static str,
    pub payload: ColorPayload,
}

impl DragPayload {
    pub fn new(rgb: Rgb) -> Self {
        Self {
            mime: COLOR_MIME_TYPE,
            payload: ColorPayload::from_rgb(rgb),
        }
    }

    pub fn bytes(&self) -> [u8; PAYLOAD_LEN] {
        self.payload.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRECISION: f64 = 1.0 / 65535.0;

    #[test]
    fn test_round_trip_within_precision() {
        let rgb = Rgb::new(0.5, 0.25, 0.75);
        let decoded = ColorPayload::from_rgb(rgb).to_rgb();
        assert!((decoded.r - 0.5).abs() <= PRECISION);
        assert!((decoded.g - 0.25).abs() <= PRECISION);
        assert!((decoded.b - 0.75).abs() <= PRECISION);
    }

    #[test]
    fn test_round_trip_through_bytes() {
        let rgb = Rgb::new(0.1, 0.9, 0.333);
        let bytes = DragPayload::new(rgb).bytes();
        let decoded = ColorPayload::from_drop(COLOR_MIME_TYPE, &bytes)
            .map(ColorPayload::to_rgb)
            .unwrap();
        for (a, b) in decoded.to_array().iter().zip(rgb.to_array()) {
            assert!((a - b).abs() <= PRECISION);
        }
    }

    #[test]
    fn test_field_values() {
        let payload = ColorPayload::from_rgb(Rgb::new(0.5, 0.25, 0.75));
        assert_eq!(payload.fields(), [32768, 16384, 49152, 0]);
    }

    #[test]
    fn test_full_channel_clamps() {
        let payload = ColorPayload::from_rgb(Rgb::new(1.0, 0.0, 2.0));
        assert_eq!(payload.fields(), [65535, 0, 65535, 0]);
        let payload = ColorPayload::from_rgb(Rgb::new(-0.5, f64::NAN, 0.0));
        assert_eq!(payload.fields(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_bytes_are_host_endian_fields() {
        let payload = ColorPayload::from_rgb(Rgb::new(0.5, 0.0, 0.0));
        let bytes = payload.to_bytes();
        assert_eq!(&bytes[0..2], &32768u16.to_ne_bytes());
        assert_eq!(&bytes[6..8], &[0, 0]);
    }

    #[test]
    fn test_wrong_size_rejected() {
        assert_eq!(
            ColorPayload::from_bytes(&[0; 6]),
            Err(DropError::WrongSize {
                expected: 8,
                actual: 6
            })
        );
        assert!(ColorPayload::from_bytes(&[0; 9]).is_err());
    }

    #[test]
    fn test_wrong_mime_rejected() {
        let err = ColorPayload::from_drop("text/plain", &[0; 8]).unwrap_err();
        assert_eq!(
            err,
            DropError::UnsupportedMime {
                mime: "text/plain".into()
            }
        );
        assert_eq!(err.to_string(), "Unsupported drop type 'text/plain'");
    }
}
