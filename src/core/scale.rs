use crate::error::{ChartError, ChartResult};

/// Linear map from a numeric domain onto a pixel extent `[0, extent_px]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * extent_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / extent_px;
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_extent(extent_px: f64) -> ChartResult<()> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "pixel extent must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn rejects_zero_span_domain() {
        assert!(LinearScale::new(3.0, 3.0).is_err());
        assert!(LinearScale::new(f64::NAN, 3.0).is_err());
    }

    #[test]
    fn rejects_non_positive_extent() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale");
        assert!(scale.domain_to_pixel(5.0, 0.0).is_err());
        assert!(scale.pixel_to_domain(5.0, -1.0).is_err());
    }

    #[test]
    fn maps_midpoint_to_half_extent() {
        let scale = LinearScale::new(10.0, 20.0).expect("scale");
        let px = scale.domain_to_pixel(15.0, 400.0).expect("px");
        assert!((px - 200.0).abs() <= 1e-12);
    }
}
