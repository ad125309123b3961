use bevy::prelude::*;
use bevy_kira_audio::AudioApp;

use super::resources::{EffectsSoundChannel, EnemySoundChannel, SoundLimiter, WeaponSoundChannel};
use super::systems::{play_combat_sounds, play_effect_sounds, tick_sound_limiter};
use crate::game::events::{
    EnemyKilledEvent, ExplosionEvent, PickupCollectedEvent, PlayerLevelUpEvent,
    WaveStateChangedEvent, WeaponFiredEvent,
};

/// Kira audio backend plus the gameplay cue systems.
/// Leave it out (e.g. `--mute`) and the simulation runs unchanged without sound.
pub fn plugin(app: &mut App) {
    app.add_plugins(bevy_kira_audio::AudioPlugin)
        .add_audio_channel::<WeaponSoundChannel>()
        .add_audio_channel::<EnemySoundChannel>()
        .add_audio_channel::<EffectsSoundChannel>();
    cues_plugin(app);
}

/// Cue systems only; every channel is optional
pub fn cues_plugin(app: &mut App) {
    app.init_resource::<SoundLimiter>()
        .add_message::<WeaponFiredEvent>()
        .add_message::<EnemyKilledEvent>()
        .add_message::<PickupCollectedEvent>()
        .add_message::<PlayerLevelUpEvent>()
        .add_message::<ExplosionEvent>()
        .add_message::<WaveStateChangedEvent>()
        .add_systems(
            Update,
            (tick_sound_limiter, play_combat_sounds, play_effect_sounds).chain(),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::components::EnemyKind;

    #[test]
    fn test_cues_without_audio_backend_are_skipped() {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_plugins(cues_plugin);

        app.world_mut().write_message(EnemyKilledEvent {
            enemy: Entity::PLACEHOLDER,
            kind: EnemyKind::Basic,
            xp_value: 20,
            position: Vec2::ZERO,
        });
        app.world_mut().write_message(PlayerLevelUpEvent {
            new_level: 2,
            previous_level: 1,
        });
        app.update();

        assert!(app.world().contains_resource::<SoundLimiter>());
    }
}
