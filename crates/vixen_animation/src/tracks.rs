use crate::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
    /// glTF `CUBICSPLINE`: `values` holds `[in_tangent, value, out_tangent]`
    /// per keyframe.
    CubicSpline,
}

/// Remembers the last keyframe segment a track was sampled in, so forward
/// playback finds the next segment without a search.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Time of the last keyframe (0 for an empty track).
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples without a cursor. Returns `None` for an empty track.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        let mut cursor = KeyframeCursor::default();
        self.sample_with_cursor(time, &mut cursor)
    }

    /// Number of values `times.len()` keyframes need in this mode.
    #[must_use]
    pub fn expected_value_count(&self) -> usize {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.times.len() * 3,
            _ => self.times.len(),
        }
    }

    /// Whether `values` has exactly one entry (three for cubic) per keyframe.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.values.len() == self.expected_value_count()
    }

    /// Samples at `time`, clamping to the first and last keyframe.
    ///
    /// Returns `None` for an empty track or one with too few values.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        let len = self.times.len();
        if len == 0 || self.values.len() < self.expected_value_count() {
            return None;
        }
        if len == 1 || time <= self.times[0] {
            cursor.last_index = 0;
            return self.value_at(0).cloned();
        }
        if time >= self.times[len - 1] {
            cursor.last_index = len - 1;
            return self.value_at(len - 1).cloned();
        }

        let index = self.find_segment(time, cursor.last_index);
        cursor.last_index = index;
        self.interpolate_segment(index, time)
    }

    /// Index `i` such that `times[i] <= time < times[i + 1]`.
    /// `time` is strictly inside the track's range here.
    fn find_segment(&self, time: f32, hint: usize) -> usize {
        let in_segment = |i: usize| self.times[i] <= time && time < self.times[i + 1];
        let last_segment = self.times.len() - 2;

        if hint <= last_segment && in_segment(hint) {
            return hint;
        }
        if hint < last_segment && in_segment(hint + 1) {
            return hint + 1;
        }
        self.times.partition_point(|&t| t <= time).saturating_sub(1)
    }

    fn value_at(&self, index: usize) -> Option<&T> {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.values.get(index * 3 + 1),
            _ => self.values.get(index),
        }
    }

    fn interpolate_segment(&self, index: usize, time: f32) -> Option<T> {
        let next = index + 1;
        let t0 = self.times[index];
        let dt = self.times[next] - t0;
        let t = if dt > f32::EPSILON {
            ((time - t0) / dt).clamp(0.0, 1.0)
        } else {
            0.0
        };

        match self.interpolation {
            InterpolationMode::Step => self.value_at(index).cloned(),
            InterpolationMode::Linear => Some(T::interpolate_linear(self.value_at(index)?, self.value_at(next)?, t)),
            InterpolationMode::CubicSpline => {
                let a = index * 3;
                let b = next * 3;
                Some(T::interpolate_cubic(
                    self.values.get(a + 1)?,
                    self.values.get(a + 2)?,
                    self.values.get(b)?,
                    self.values.get(b + 1)?,
                    t,
                    dt,
                ))
            }
        }
    }
}
