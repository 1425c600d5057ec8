use crate::core::distance::{haversine_miles, round_miles};
use crate::models::{GeoPoint, Property};

/// Writes commute distances onto property records.
///
/// Every record that does not already carry a numeric `distance` gets one:
/// the haversine miles from the reference point, rounded to two decimals,
/// or 0 when the record has no usable coordinates. Records that arrive
/// annotated are left untouched, so reannotation is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct DistanceAnnotator {
    reference: GeoPoint,
}

impl DistanceAnnotator {
    pub fn new(reference: GeoPoint) -> Self {
        Self { reference }
    }

    /// The fixed point all commute distances are measured from.
    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    /// Annotate every record in place. A record with missing or invalid
    /// coordinates gets distance 0 and never aborts the batch.
    pub fn annotate(&self, records: &mut [Property]) {
        for record in records.iter_mut() {
            self.annotate_record(record);
        }
    }

    fn annotate_record(&self, record: &mut Property) {
        // Precomputed distances win.
        if record.distance().is_some() {
            return;
        }

        let miles = record
            .coordinates()
            .map(|point| {
                round_miles(haversine_miles(
                    self.reference.latitude,
                    self.reference.longitude,
                    point.latitude,
                    point.longitude,
                ))
            })
            .filter(|miles| miles.is_finite())
            .unwrap_or(0.0);

        record.set_distance(miles);
    }
}
