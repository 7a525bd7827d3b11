//! Fly camera, movement input and view/projection uniforms.
//!
//! The camera follows the classic first-person scheme: yaw and pitch in
//! degrees drive a derived unit-length front vector, mouse input steers the
//! angles and held keys translate the position along the look and strafe
//! axes. The GPU side is a single uniform buffer holding the view and
//! projection matrices, bound at group 0.

use cgmath::{Deg, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3, perspective};
use instant::Duration;

/// wgpu clip space spans z in [0, 1] while cgmath produces OpenGL-style
/// [-1, 1], so every projection matrix gets this correction applied.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Movement speed in world units per second.
pub const MOVE_SPEED: f32 = 3.0;
/// Mouse sensitivity in degrees of rotation per pixel of cursor travel.
pub const MOUSE_SENSITIVITY: f32 = 0.1;
/// Pitch never reaches the poles, where look-at would degenerate.
const PITCH_LIMIT: f32 = 89.0;

/// Held state of the four movement keys, updated from window events.
///
/// Held keys combine additively; two held keys move the camera along both
/// axes at full speed each, so diagonal travel is faster than axis-aligned
/// travel. That matches the keyboard handling this viewer was built around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// First-person camera state: position plus yaw/pitch-derived orientation.
#[derive(Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    /// Unit vector the camera looks along, derived from yaw and pitch.
    pub front: Vector3<f32>,
    /// Fixed world up. The camera never rolls.
    pub up: Vector3<f32>,
    yaw: f32,
    pitch: f32,
    last_cursor: Option<(f64, f64)>,
}

impl Camera {
    pub fn new<P: Into<Point3<f32>>>(position: P, yaw: Deg<f32>, pitch: Deg<f32>) -> Self {
        let mut camera = Self {
            position: position.into(),
            front: -Vector3::unit_z(),
            up: Vector3::unit_y(),
            yaw: yaw.0,
            pitch: pitch.0.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            last_cursor: None,
        };
        camera.update_front();
        camera
    }

    pub fn yaw(&self) -> Deg<f32> {
        Deg(self.yaw)
    }

    pub fn pitch(&self) -> Deg<f32> {
        Deg(self.pitch)
    }

    /// Feed an absolute cursor position in pixels.
    ///
    /// The first sample only establishes the reference point, so acquiring
    /// the cursor never jerks the view. Screen y grows downwards while pitch
    /// grows upwards, hence the inverted y offset.
    pub fn process_mouse(&mut self, x: f64, y: f64) {
        let (last_x, last_y) = self.last_cursor.unwrap_or((x, y));
        let x_offset = (x - last_x) as f32 * MOUSE_SENSITIVITY;
        let y_offset = (last_y - y) as f32 * MOUSE_SENSITIVITY;
        self.last_cursor = Some((x, y));

        self.yaw += x_offset;
        self.pitch = (self.pitch + y_offset).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    /// Feed raw relative mouse motion, as delivered while the cursor is
    /// grabbed and the windowing layer reports no absolute position.
    ///
    /// Deltas accumulate into an unbounded virtual cursor, so yaw keeps
    /// growing past any window border. The reference handling stays in
    /// [`process_mouse`](Self::process_mouse).
    pub fn process_mouse_delta(&mut self, dx: f64, dy: f64) {
        let (x, y) = self.last_cursor.unwrap_or((0.0, 0.0));
        self.process_mouse(x + dx, y + dy);
    }

    /// Forget the cursor reference, e.g. after the window regains focus.
    ///
    /// The next sample then re-establishes the reference with zero delta
    /// instead of reading the jump as one huge offset.
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
    }

    /// Translate the camera along the look and strafe axes for one frame.
    pub fn process_keyboard(&mut self, keys: &MovementKeys, dt: Duration) {
        let speed = MOVE_SPEED * dt.as_secs_f32();
        let right = self.front.cross(self.up).normalize();
        if keys.forward {
            self.position += self.front * speed;
        }
        if keys.backward {
            self.position -= self.front * speed;
        }
        if keys.left {
            self.position -= right * speed;
        }
        if keys.right {
            self.position += right * speed;
        }
    }

    fn update_front(&mut self) {
        let yaw = Rad::from(Deg(self.yaw));
        let pitch = Rad::from(Deg(self.pitch));
        self.front = Vector3::new(
            yaw.0.cos() * pitch.0.cos(),
            pitch.0.sin(),
            yaw.0.sin() * pitch.0.cos(),
        )
        .normalize();
    }

    /// View matrix: look from the camera position along the front vector.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }
}

/// Perspective projection; only the aspect ratio changes after creation.
#[derive(Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Deg<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32, fovy: Deg<f32>, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy,
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// The matrices uploaded to the GPU once per frame.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view: Matrix4::identity().into(),
            proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view = camera.calc_matrix().into();
        self.proj = projection.calc_matrix().into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera state together with its GPU resources and held-key state.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub keys: MovementKeys,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_camera() -> Camera {
        Camera::new((0.0, 2.0, 5.0), Deg(-90.0), Deg(0.0))
    }

    #[test]
    fn initial_front_points_down_negative_z() {
        let camera = test_camera();
        assert_relative_eq!(camera.front, -Vector3::unit_z(), epsilon = 1e-6);
    }

    #[test]
    fn first_mouse_sample_does_not_turn() {
        let mut camera = test_camera();
        camera.process_mouse(731.0, 12.0);
        assert_relative_eq!(camera.yaw().0, -90.0);
        assert_relative_eq!(camera.pitch().0, 0.0);
    }

    #[test]
    fn mouse_delta_scales_by_sensitivity() {
        let mut camera = test_camera();
        camera.process_mouse(100.0, 100.0);
        camera.process_mouse(110.0, 95.0);
        assert_relative_eq!(camera.yaw().0, -89.0, epsilon = 1e-4);
        assert_relative_eq!(camera.pitch().0, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn raw_deltas_match_the_absolute_path() {
        let mut camera = test_camera();
        camera.process_mouse_delta(0.0, 0.0);
        camera.process_mouse_delta(10.0, -5.0);
        assert_relative_eq!(camera.yaw().0, -89.0, epsilon = 1e-4);
        assert_relative_eq!(camera.pitch().0, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn raw_deltas_accumulate_past_any_window_border() {
        let mut camera = test_camera();
        camera.process_mouse_delta(0.0, 0.0);
        // A confined cursor would clamp at the window edge; raw motion
        // keeps turning.
        for _ in 0..100 {
            camera.process_mouse_delta(100.0, 0.0);
        }
        assert_relative_eq!(camera.yaw().0, -90.0 + 1000.0, epsilon = 1e-2);
    }

    #[test]
    fn reset_cursor_makes_the_next_sample_a_reference() {
        let mut camera = test_camera();
        camera.process_mouse(100.0, 100.0);
        camera.process_mouse(110.0, 95.0);
        let yaw = camera.yaw();
        let pitch = camera.pitch();

        // Focus loss and regain: a large cursor jump must not yank the view.
        camera.reset_cursor();
        camera.process_mouse(5_000.0, -3_000.0);
        assert_relative_eq!(camera.yaw().0, yaw.0);
        assert_relative_eq!(camera.pitch().0, pitch.0);
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut camera = test_camera();
        camera.process_mouse(0.0, 0.0);
        camera.process_mouse(0.0, -10_000.0);
        assert_relative_eq!(camera.pitch().0, 89.0);
        camera.process_mouse(0.0, 50_000.0);
        assert_relative_eq!(camera.pitch().0, -89.0);
    }

    #[test]
    fn front_stays_unit_length() {
        let mut camera = test_camera();
        for (x, y) in [(10.0, 40.0), (600.0, -20.0), (-35.0, 480.0)] {
            camera.process_mouse(x, y);
            assert_relative_eq!(camera.front.magnitude(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn no_keys_no_motion() {
        let mut camera = test_camera();
        let start = camera.position;
        camera.process_keyboard(&MovementKeys::default(), Duration::from_secs_f32(2.5));
        assert_eq!(camera.position, start);
    }

    #[test]
    fn forward_moves_along_front() {
        let mut camera = test_camera();
        let keys = MovementKeys {
            forward: true,
            ..Default::default()
        };
        camera.process_keyboard(&keys, Duration::from_secs_f32(0.5));
        let expected = Point3::new(0.0, 2.0, 5.0) + -Vector3::unit_z() * (MOVE_SPEED * 0.5);
        assert_relative_eq!(camera.position, expected, epsilon = 1e-5);
    }

    #[test]
    fn diagonal_movement_is_unnormalized() {
        let mut camera = test_camera();
        let keys = MovementKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        camera.process_keyboard(&keys, Duration::from_secs_f32(1.0));
        let travelled = camera.position - Point3::new(0.0, 2.0, 5.0);
        // Both axes applied at full speed: sqrt(2) times the single-key pace.
        assert_relative_eq!(
            travelled.magnitude(),
            MOVE_SPEED * 2.0_f32.sqrt(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn resize_changes_projection_but_not_view() {
        let camera = test_camera();
        let mut projection = Projection::new(800, 600, Deg(60.0), 0.1, 200.0);
        let view_before = camera.calc_matrix();
        let proj_before = projection.calc_matrix();

        projection.resize(1920, 1080);

        assert_eq!(camera.calc_matrix(), view_before);
        assert_ne!(projection.calc_matrix(), proj_before);
    }
}
