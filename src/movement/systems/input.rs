//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    *input = MovementInput {
        move_right_held: keyboard.any_pressed(RIGHT_KEYS),
        move_left_held: keyboard.any_pressed(LEFT_KEYS),
        jump_held: keyboard.any_pressed(JUMP_KEYS),
        jump_pressed: keyboard.any_just_pressed(JUMP_KEYS),
        jump_released: keyboard.any_just_released(JUMP_KEYS),
    };
}
