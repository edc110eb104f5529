use std::time::Duration;

use keithley_2200::{Arg, Keithley2200, SerialConfig, SerialInterfaceKeithley2200};
use measurements::Voltage;

fn main() {
    let mut config = SerialConfig::new("/dev/ttyUSB0");
    config.timeout = Duration::from_secs(1);

    // Get our serial instrument interface
    let serial_inst =
        SerialInterfaceKeithley2200::with_config(&config).expect("Failed to open serial port");

    // Now we can open the power supply with the serial interface.
    let mut inst = Keithley2200::try_new(serial_inst).unwrap();
    println!("Instrument: {}", inst.get_identity().unwrap());
    inst.set_remote().unwrap();

    // Program 5 V with a current limit of 100 mA and turn the output on
    inst.set_voltage(Voltage::from_volts(5.0)).unwrap();
    inst.set_current(Arg::from(100).with_unit("mA")).unwrap();
    inst.set_output("ON").unwrap();

    // A current above the rating of the model is rejected before it is sent
    if let Err(err) = inst.set_current(10) {
        println!("Rejected: {err}");
    }

    println!("Voltage: {}", inst.measure_voltage().unwrap());
    println!("Current: {}", inst.measure_current().unwrap());

    inst.set_output("OFF").unwrap();
    inst.set_local().unwrap();
}
