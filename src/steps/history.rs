use crate::maze::Grid;

/// Playback cursor over a finished step sequence, for stepping an animation
/// forward and backward by hand.
pub struct StepPlayer {
    /// Recorded snapshots, oldest first.
    steps: Vec<Grid>,
    /// Index of the snapshot currently shown. Always below `steps.len()`
    /// unless the sequence is empty.
    step_index: usize,
}

impl StepPlayer {
    pub fn new(steps: Vec<Grid>) -> Self {
        StepPlayer {
            steps,
            step_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn position(&self) -> usize {
        self.step_index
    }

    pub fn current(&self) -> Option<&Grid> {
        self.steps.get(self.step_index)
    }

    /// True once the cursor sits on the last snapshot.
    pub fn is_finished(&self) -> bool {
        self.step_index + 1 >= self.steps.len()
    }

    pub fn step_forward(&mut self) -> Option<&Grid> {
        if self.is_finished() {
            None // Already at the last snapshot
        } else {
            self.step_index += 1;
            self.steps.get(self.step_index)
        }
    }

    pub fn step_backward(&mut self) -> Option<&Grid> {
        match self.step_index {
            0 => None,
            _ => {
                self.step_index -= 1;
                self.steps.get(self.step_index)
            }
        }
    }

    pub fn reset(&mut self) {
        self.step_index = 0;
    }

    /// Gives the snapshots back, e.g. when an animation is cancelled.
    pub fn into_steps(self) -> Vec<Grid> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(n: usize) -> Vec<Grid> {
        (0..n)
            .map(|i| {
                let mut grid = Grid::new(1, 4, (0, 0), (0, 3)).unwrap();
                if i > 0 {
                    grid.set_wall((0, i.min(2)), true);
                }
                grid
            })
            .collect()
    }

    #[test]
    fn test_forward_and_backward() {
        let mut player = StepPlayer::new(sequence(3));
        assert_eq!(player.position(), 0);
        assert!(player.step_backward().is_none());
        assert!(player.step_forward().is_some());
        assert!(player.step_forward().is_some());
        assert!(player.is_finished());
        assert!(player.step_forward().is_none());
        assert_eq!(player.position(), 2);
        assert!(player.step_backward().is_some());
        assert_eq!(player.position(), 1);
        player.reset();
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn test_empty_sequence() {
        let mut player = StepPlayer::new(Vec::new());
        assert!(player.is_empty());
        assert!(player.is_finished());
        assert!(player.current().is_none());
        assert!(player.step_forward().is_none());
        assert!(player.step_backward().is_none());
    }

    #[test]
    fn test_into_steps_returns_whole_sequence() {
        let steps = sequence(3);
        let mut player = StepPlayer::new(steps.clone());
        player.step_forward();
        assert_eq!(player.into_steps(), steps);
    }
}
