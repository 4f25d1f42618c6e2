/// What the host should do after dispatching a menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Quit,
}

/// Air-hockey menu commands. `from_selection` keeps the original right-click
/// menu numbering for hosts that still speak integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HockeyMenu {
    Start,
    TogglePause,
    CameraTop,
    CameraPlayer,
    CameraSide,
    ToggleAi,
    Restart,
    Quit,
}

impl HockeyMenu {
    pub fn from_selection(selection: i32) -> Option<Self> {
        match selection {
            1 => Some(HockeyMenu::Start),
            2 => Some(HockeyMenu::TogglePause),
            3 => Some(HockeyMenu::CameraTop),
            4 => Some(HockeyMenu::CameraPlayer),
            5 => Some(HockeyMenu::CameraSide),
            6 => Some(HockeyMenu::ToggleAi),
            7 => Some(HockeyMenu::Restart),
            8 => Some(HockeyMenu::Quit),
            _ => None,
        }
    }
}

/// Maze-ball menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeMenu {
    PlayGame,
    PlayDemo,
    Restart,
    TogglePause,
    ToggleMouseControl,
    ToggleFollowBall,
    Quit,
}

impl MazeMenu {
    pub fn from_selection(selection: i32) -> Option<Self> {
        match selection {
            1 => Some(MazeMenu::PlayGame),
            2 => Some(MazeMenu::PlayDemo),
            3 => Some(MazeMenu::Restart),
            4 => Some(MazeMenu::TogglePause),
            5 => Some(MazeMenu::ToggleMouseControl),
            6 => Some(MazeMenu::ToggleFollowBall),
            7 => Some(MazeMenu::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hockey_selection_round_trip() {
        assert_eq!(HockeyMenu::from_selection(1), Some(HockeyMenu::Start));
        assert_eq!(HockeyMenu::from_selection(6), Some(HockeyMenu::ToggleAi));
        assert_eq!(HockeyMenu::from_selection(8), Some(HockeyMenu::Quit));
        assert_eq!(HockeyMenu::from_selection(0), None);
        assert_eq!(HockeyMenu::from_selection(9), None);
    }

    #[test]
    fn maze_selection_round_trip() {
        assert_eq!(MazeMenu::from_selection(1), Some(MazeMenu::PlayGame));
        assert_eq!(MazeMenu::from_selection(3), Some(MazeMenu::Restart));
        assert_eq!(MazeMenu::from_selection(7), Some(MazeMenu::Quit));
        assert_eq!(MazeMenu::from_selection(42), None);
    }
}
