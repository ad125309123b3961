use bevy::prelude::*;

use crate::game::resources::ViewBounds;

pub fn spawn_camera(mut commands: Commands, camera_query: Query<Entity, With<Camera2d>>) {
    if camera_query.is_empty() {
        commands.spawn((Camera2d, Name::new("Main Camera")));
    }
}

/// Keep the camera centred on the view rectangle, which already follows the
/// player and stays inside the world
pub fn camera_follow_system(
    view: Res<ViewBounds>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let center = view.0.center();
    for mut transform in camera_query.iter_mut() {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}
