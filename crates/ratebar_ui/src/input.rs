//! Input handling for rating widgets.
//!
//! The host feeds raw mouse and keyboard state once per frame; widgets read
//! it and translate it into the engine's pointer and key events.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button (or primary touch).
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Keyboard keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key; cancels an active pointer session.
    Escape,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse X position.
    pub mouse_x: f32,
    /// Current mouse Y position.
    pub mouse_y: f32,
    /// Mouse X position last frame.
    pub prev_mouse_x: f32,
    /// Mouse Y position last frame.
    pub prev_mouse_y: f32,
    /// Mouse buttons pressed this frame.
    buttons_pressed: u8,
    /// Mouse buttons released this frame.
    buttons_released: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
    /// Keys pressed this frame.
    keys_pressed: Vec<Key>,
    /// Keys currently held.
    keys_down: Vec<Key>,
    /// The platform withdrew the pointer this frame.
    pointer_cancelled: bool,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame state.
    pub fn begin_frame(&mut self) {
        self.prev_mouse_x = self.mouse_x;
        self.prev_mouse_y = self.mouse_y;
        self.buttons_pressed = 0;
        self.buttons_released = 0;
        self.keys_pressed.clear();
        self.pointer_cancelled = false;
    }

    /// Updates mouse position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_released |= mask;
        self.buttons_down &= !mask;
    }

    /// Records that the platform took the pointer away (focus loss, touch
    /// stolen by a scroll view). Held buttons are dropped without a release.
    pub fn cancel_pointer(&mut self) {
        self.pointer_cancelled = true;
        self.buttons_down = 0;
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_pressed.push(key);
            self.keys_down.push(key);
        }
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        self.keys_down.retain(|&k| k != key);
    }

    /// Returns true if the mouse button was clicked this frame.
    #[must_use]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button was released this frame.
    #[must_use]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns true if the pointer was cancelled this frame.
    #[must_use]
    pub fn pointer_cancelled(&self) -> bool {
        self.pointer_cancelled
    }

    /// Returns true if the key was pressed this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Keys pressed this frame, in arrival order.
    #[must_use]
    pub fn keys_pressed(&self) -> &[Key] {
        &self.keys_pressed
    }

    /// Returns true if the key is currently held.
    #[must_use]
    pub fn key_held(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true if the mouse moved since last frame.
    #[must_use]
    pub fn mouse_moved(&self) -> bool {
        let (dx, dy) = self.mouse_delta();
        dx != 0.0 || dy != 0.0
    }

    /// Returns the mouse movement delta.
    #[must_use]
    pub fn mouse_delta(&self) -> (f32, f32) {
        (self.mouse_x - self.prev_mouse_x, self.mouse_y - self.prev_mouse_y)
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }
}
