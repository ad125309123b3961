use bevy::prelude::*;

use crate::camera::systems::{camera_follow_system, spawn_camera};
use crate::game::sets::GameSet;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera)
        .add_systems(Update, camera_follow_system.after(GameSet::Movement));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resources::ViewBounds;

    #[test]
    fn test_camera_tracks_view_center() {
        let mut app = App::new();
        app.init_resource::<ViewBounds>();
        app.add_plugins(plugin);
        app.update();

        app.world_mut().resource_mut::<ViewBounds>().0 =
            Rect::from_center_size(Vec2::new(700.0, 500.0), Vec2::new(1024.0, 768.0));
        app.update();

        let world = app.world_mut();
        let transforms: Vec<Vec3> = world
            .query_filtered::<&Transform, With<Camera2d>>()
            .iter(world)
            .map(|t| t.translation)
            .collect();
        assert_eq!(transforms.len(), 1);
        assert_eq!(transforms[0].truncate(), Vec2::new(700.0, 500.0));
    }
}
