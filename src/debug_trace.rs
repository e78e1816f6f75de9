macro_rules! trace {
    ( @state $state:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@state: {:?}", $state);
    };

    ( @emit $event:expr, $element:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@emit: {:?} {:?}", $event, $element);
    };

    ( @chars $action_descr:expr, $ch:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!(">{}: {:?}", $action_descr, $ch);
    };
}
